//! Ordered fallback across photo providers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{PexelsClient, ProviderSettings, UnsplashClient};
use crate::domain::entities::{ImagePayload, ImageQuery, ProviderKind};
use crate::domain::errors::ProviderError;
use crate::domain::ports::{ImageProviderPort, PhotoSearchPort};
use crate::infrastructure::config::AppConfig;

/// Tries each provider once, in order, and returns the first image found.
///
/// Provider errors are logged and treated as "no image".
#[derive(Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn PhotoSearchPort>>,
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChain")
            .field("providers", &self.kinds())
            .finish()
    }
}

impl ProviderChain {
    /// Creates chain over providers in priority order.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn PhotoSearchPort>>) -> Self {
        Self { providers }
    }

    /// Builds the Pexels and Unsplash clients in the configured order.
    ///
    /// # Errors
    /// Returns error if an HTTP client cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let mut providers: Vec<Arc<dyn PhotoSearchPort>> = Vec::new();

        for kind in config.effective_provider_order() {
            let provider: Arc<dyn PhotoSearchPort> = match kind {
                ProviderKind::Pexels => {
                    if config.pexels.api_key.is_none() {
                        warn!("No Pexels API key configured, Pexels lookups disabled");
                    }
                    let settings = ProviderSettings::new(&config.pexels.base_url)
                        .with_timeout(config.request_timeout())
                        .with_orientation(config.orientation);
                    Arc::new(PexelsClient::with_settings(
                        config.pexels.api_key.clone(),
                        settings,
                    )?)
                }
                ProviderKind::Unsplash => {
                    if config.unsplash.access_key.is_none() {
                        warn!("No Unsplash access key configured, Unsplash lookups disabled");
                    }
                    let settings = ProviderSettings::new(&config.unsplash.base_url)
                        .with_timeout(config.request_timeout())
                        .with_orientation(config.orientation);
                    Arc::new(UnsplashClient::with_settings(
                        config.unsplash.access_key.clone(),
                        settings,
                    )?)
                }
            };
            providers.push(provider);
        }

        let chain = Self::new(providers);
        info!(providers = ?chain.kinds(), "Provider chain ready");
        Ok(chain)
    }

    /// Returns provider kinds in the order they are tried.
    #[must_use]
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }
}

#[async_trait]
impl ImageProviderPort for ProviderChain {
    async fn get_image(&self, query: &ImageQuery) -> Option<ImagePayload> {
        for provider in &self.providers {
            let kind = provider.kind();
            match provider.fetch(query).await {
                Ok(Some(payload)) => {
                    debug!(
                        provider = %kind,
                        query = %query,
                        size = payload.encoded_len(),
                        "Provider returned image"
                    );
                    return Some(payload);
                }
                Ok(None) => debug!(provider = %kind, query = %query, "Provider found no image"),
                Err(e) => warn!(provider = %kind, query = %query, error = %e, "Provider lookup failed"),
            }
        }
        None
    }

    async fn find_image_url(&self, query: &ImageQuery) -> Option<String> {
        for provider in &self.providers {
            let kind = provider.kind();
            match provider.search_url(query).await {
                Ok(Some(url)) => return Some(url),
                Ok(None) => debug!(provider = %kind, query = %query, "Provider found no image"),
                Err(e) => warn!(provider = %kind, query = %query, error = %e, "Provider search failed"),
            }
        }
        None
    }
}
