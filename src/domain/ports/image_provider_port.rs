//! Port for best-effort image retrieval.

use async_trait::async_trait;

use crate::domain::entities::{ImagePayload, ImageQuery};

/// Resolves a query to an image, or nothing.
///
/// Absence is a normal outcome; implementations never fail.
#[async_trait]
pub trait ImageProviderPort: Send + Sync {
    /// Returns an encoded image for the query, if any provider has one.
    async fn get_image(&self, query: &ImageQuery) -> Option<ImagePayload>;

    /// Returns the URL of a matching image without downloading it.
    async fn find_image_url(&self, query: &ImageQuery) -> Option<String>;
}
