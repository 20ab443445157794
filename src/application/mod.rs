//! Application layer containing the image cache services.

/// Application services.
pub mod services;

pub use services::{CategoryImages, ImageCacheConfig, ImageCacheService};
