//! Explicitly constructed application context.
//!
//! Holds the configuration and the services built from it. Callers receive
//! the context by reference instead of reaching for global state.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::application::services::{CategoryImages, ImageCacheConfig, ImageCacheService};
use crate::domain::entities::ttl_from_hours;
use crate::domain::errors::{ProviderError, StoreError};
use crate::domain::ports::{ClockPort, ImageProviderPort, KeyValueStorePort};
use crate::infrastructure::{
    AppConfig, FileKeyValueStore, MemoryKeyValueStore, ProviderChain, SystemClock,
};

/// Failure while wiring the context together.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ContextError {
    #[error("provider setup failed: {0}")]
    Provider(#[from] ProviderError),
    #[error("image store setup failed: {0}")]
    Store(#[from] StoreError),
}

/// Shared services for one application run.
pub struct AppContext {
    config: AppConfig,
    provider: Arc<dyn ImageProviderPort>,
    images: Arc<ImageCacheService>,
    categories: CategoryImages,
}

impl AppContext {
    /// Builds provider chain, store and cache from configuration.
    ///
    /// # Errors
    /// Returns error if an HTTP client or the cache directory cannot be created.
    pub async fn from_config(config: AppConfig) -> Result<Self, ContextError> {
        let provider: Arc<dyn ImageProviderPort> = Arc::new(ProviderChain::from_config(&config)?);

        let store: Arc<dyn KeyValueStorePort> = if config.ephemeral {
            debug!("Using in-memory image store");
            Arc::new(MemoryKeyValueStore::new())
        } else if let Some(dir) = &config.cache_dir {
            Arc::new(FileKeyValueStore::new(dir.clone()).await?)
        } else {
            Arc::new(FileKeyValueStore::default_location().await?)
        };

        Ok(Self::new(config, provider, store, Arc::new(SystemClock)))
    }

    /// Assembles a context from already built parts.
    #[must_use]
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn ImageProviderPort>,
        store: Arc<dyn KeyValueStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let cache_config = ImageCacheConfig {
            ttl: ttl_from_hours(config.ttl_hours),
            prime_concurrency: config.prime_concurrency,
        };
        let images = Arc::new(ImageCacheService::new(
            provider.clone(),
            store,
            clock,
            cache_config,
        ));
        let categories = CategoryImages::new(images.clone());

        Self {
            config,
            provider,
            images,
            categories,
        }
    }

    /// Returns the effective configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the uncached provider chain.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn ImageProviderPort> {
        &self.provider
    }

    /// Returns the image cache.
    #[must_use]
    pub const fn images(&self) -> &Arc<ImageCacheService> {
        &self.images
    }

    /// Returns category thumbnail lookups.
    #[must_use]
    pub const fn categories(&self) -> &CategoryImages {
        &self.categories
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}
