//! Pexels photo search client.

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, trace};

use super::dto::PexelsSearchResponse;
use super::{ProviderSettings, http};
use crate::domain::entities::{ApiKey, ImagePayload, ImageQuery, ProviderKind};
use crate::domain::errors::ProviderError;
use crate::domain::ports::PhotoSearchPort;

/// Public Pexels API root.
pub const PEXELS_API_BASE: &str = "https://api.pexels.com";

const KIND: ProviderKind = ProviderKind::Pexels;

/// Pexels search client. Without an API key every lookup is skipped.
pub struct PexelsClient {
    client: Client,
    api_key: Option<ApiKey>,
    settings: ProviderSettings,
}

impl std::fmt::Debug for PexelsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsClient")
            .field("api_key", &self.api_key)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl PexelsClient {
    /// Creates client against the public API.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(api_key: Option<ApiKey>) -> Result<Self, ProviderError> {
        Self::with_settings(api_key, ProviderSettings::new(PEXELS_API_BASE))
    }

    /// Creates client with custom settings.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_settings(
        api_key: Option<ApiKey>,
        settings: ProviderSettings,
    ) -> Result<Self, ProviderError> {
        let client = http::build_client(KIND, &settings)?;
        Ok(Self {
            client,
            api_key,
            settings,
        })
    }
}

#[async_trait]
impl PhotoSearchPort for PexelsClient {
    fn kind(&self) -> ProviderKind {
        KIND
    }

    async fn search_url(&self, query: &ImageQuery) -> Result<Option<String>, ProviderError> {
        let Some(api_key) = &self.api_key else {
            trace!("Pexels API key not configured, skipping");
            return Ok(None);
        };

        let mut params = vec![("query", query.as_str()), ("per_page", "1")];
        if let Some(orientation) = self.settings.orientation {
            params.push(("orientation", orientation.pexels_value()));
        }

        let request = self
            .client
            .get(self.settings.endpoint("v1/search"))
            .header(header::AUTHORIZATION, api_key.as_str())
            .query(&params);

        let response = http::send(KIND, request).await?;
        let body: PexelsSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(KIND, e.to_string()))?;

        let url = body.first_image_url();
        debug!(query = %query, found = url.is_some(), "Pexels search complete");
        Ok(url)
    }

    async fn fetch(&self, query: &ImageQuery) -> Result<Option<ImagePayload>, ProviderError> {
        let Some(url) = self.search_url(query).await? else {
            return Ok(None);
        };
        http::download_payload(KIND, &self.client, &url)
            .await
            .map(Some)
    }
}
