//! Infrastructure layer with external service adapters.

/// Wall-clock time source.
pub mod clock;
/// Application configuration.
pub mod config;
/// Photo provider clients and fallback chain.
pub mod providers;
/// Key-value stores backing the image cache.
pub mod storage;

pub use clock::SystemClock;
pub use config::{AppConfig, CliArgs, Command, LoadedConfig, LogLevel, StorageManager};
pub use providers::{PexelsClient, ProviderChain, ProviderSettings, UnsplashClient};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
