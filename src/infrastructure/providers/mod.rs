//! Photo provider adapters.
//!
//! This module provides:
//! - Pexels and Unsplash search clients
//! - Download and format sniffing of the chosen photo
//! - Ordered fallback across providers

mod chain;
mod dto;
mod http;
mod pexels;
mod settings;
mod unsplash;

pub use chain::ProviderChain;
pub use pexels::{PEXELS_API_BASE, PexelsClient};
pub use settings::{DEFAULT_TIMEOUT_SECS, ProviderSettings};
pub use unsplash::{UNSPLASH_API_BASE, UnsplashClient};
