//! Port for a single external photo-search service.

use async_trait::async_trait;

use crate::domain::entities::{ImagePayload, ImageQuery, ProviderKind};
use crate::domain::errors::ProviderError;

/// One photo provider, asked for exactly one result per query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoSearchPort: Send + Sync {
    /// Which service this is.
    fn kind(&self) -> ProviderKind;

    /// Searches for the query and returns the URL of the first photo.
    /// `Ok(None)` means the provider had no result or is not configured.
    async fn search_url(&self, query: &ImageQuery) -> Result<Option<String>, ProviderError>;

    /// Searches for the query and downloads the first photo.
    async fn fetch(&self, query: &ImageQuery) -> Result<Option<ImagePayload>, ProviderError>;
}
