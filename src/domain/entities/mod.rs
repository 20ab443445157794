//! Domain entity definitions.

pub mod api_key;
mod cache_entry;
mod category;
mod image_query;
mod payload;
mod provider;

pub use api_key::ApiKey;
pub use cache_entry::{
    CacheEntry, DEFAULT_TTL_HOURS, EntryState, decode_timestamp, encode_timestamp, ttl_from_hours,
};
pub use category::{Category, ParseCategoryError};
pub use image_query::{CacheKey, ImageQuery};
pub use payload::ImagePayload;
pub use provider::{Orientation, ProviderKind};
