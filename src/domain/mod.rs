//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CacheEntry, EntryState, ImagePayload, ImageQuery};
pub use errors::{ProviderError, StoreError};
pub use ports::{ClockPort, ImageProviderPort, KeyValueStorePort, PhotoSearchPort};
