//! Application services.

mod category_images;
mod image_cache_service;

pub use category_images::CategoryImages;
pub use image_cache_service::{DEFAULT_PRIME_CONCURRENCY, ImageCacheConfig, ImageCacheService};
