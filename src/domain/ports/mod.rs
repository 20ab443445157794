mod clock_port;
mod image_provider_port;
mod kv_store_port;
mod photo_search_port;

pub use clock_port::ClockPort;
pub use image_provider_port::ImageProviderPort;
pub use kv_store_port::KeyValueStorePort;
#[cfg(test)]
pub use photo_search_port::MockPhotoSearchPort;
pub use photo_search_port::PhotoSearchPort;
