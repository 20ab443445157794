//! Persisted, TTL-bounded image lookups.
//!
//! Every query maps to two stored values: the encoded image and the time it
//! was fetched. Fresh entries are served without touching the network; stale
//! or missing entries trigger a provider lookup, and a stale entry is still
//! served when the providers come back empty.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, trace, warn};

use crate::domain::entities::{
    CacheEntry, CacheKey, DEFAULT_TTL_HOURS, EntryState, ImagePayload, ImageQuery,
    decode_timestamp, encode_timestamp, ttl_from_hours,
};
use crate::domain::ports::{ClockPort, ImageProviderPort, KeyValueStorePort};

/// Default number of lookups in flight while priming.
pub const DEFAULT_PRIME_CONCURRENCY: usize = 6;

/// Tuning for [`ImageCacheService`].
#[derive(Debug, Clone)]
pub struct ImageCacheConfig {
    /// Age after which an entry is refetched.
    pub ttl: TimeDelta,
    /// Maximum lookups in flight during [`ImageCacheService::prime_images`].
    pub prime_concurrency: usize,
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            ttl: ttl_from_hours(DEFAULT_TTL_HOURS),
            prime_concurrency: DEFAULT_PRIME_CONCURRENCY,
        }
    }
}

/// Image cache in front of the provider chain.
///
/// Concurrent misses for the same query may both reach the providers; the
/// last write wins.
pub struct ImageCacheService {
    provider: Arc<dyn ImageProviderPort>,
    store: Arc<dyn KeyValueStorePort>,
    clock: Arc<dyn ClockPort>,
    config: ImageCacheConfig,
}

impl std::fmt::Debug for ImageCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCacheService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ImageCacheService {
    /// Creates the cache over a provider, a store and a clock.
    #[must_use]
    pub fn new(
        provider: Arc<dyn ImageProviderPort>,
        store: Arc<dyn KeyValueStorePort>,
        clock: Arc<dyn ClockPort>,
        config: ImageCacheConfig,
    ) -> Self {
        Self {
            provider,
            store,
            clock,
            config,
        }
    }

    /// Returns the configured freshness window.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.config.ttl
    }

    /// Returns an image for the query, from cache when fresh.
    ///
    /// Blank queries and total provider failure with nothing cached both
    /// resolve to `None`.
    pub async fn get_image(&self, query: &str) -> Option<ImagePayload> {
        let Some(query) = ImageQuery::new(query) else {
            debug!("Ignoring blank image query");
            return None;
        };
        self.get_image_for(&query).await
    }

    /// Same as [`Self::get_image`] for an already validated query.
    pub async fn get_image_for(&self, query: &ImageQuery) -> Option<ImagePayload> {
        let key = query.cache_key();
        let cached = self.read_entry(&key).await;

        if let Some(entry) = &cached
            && entry.is_fresh(self.clock.now(), self.config.ttl)
        {
            trace!(query = %query, "Image cache hit");
            return Some(entry.payload.clone());
        }

        debug!(
            query = %query,
            stale = cached.is_some(),
            "Image cache miss, asking providers"
        );

        if let Some(payload) = self.provider.get_image(query).await {
            self.write_entry(&key, &payload, self.clock.now()).await;
            return Some(payload);
        }

        match cached {
            Some(entry) => {
                info!(query = %query, "No fresh image available, serving stale copy");
                Some(entry.payload)
            }
            None => {
                debug!(query = %query, "No image available");
                None
            }
        }
    }

    /// Looks up every query independently and returns the results in input
    /// order. A failing query never affects the others.
    pub async fn prime_images<I, S>(&self, queries: I) -> Vec<(String, Option<ImagePayload>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queries: Vec<String> = queries.into_iter().map(Into::into).collect();
        let total = queries.len();

        let results: Vec<(String, Option<ImagePayload>)> = stream::iter(queries)
            .map(|query| async move {
                let payload = self.get_image(&query).await;
                (query, payload)
            })
            .buffered(self.config.prime_concurrency.max(1))
            .collect()
            .await;

        let resolved = results.iter().filter(|(_, p)| p.is_some()).count();
        info!(total, resolved, "Primed image cache");

        results
    }

    /// Returns the stored entry for a query without any network access.
    pub async fn cached_entry(&self, query: &str) -> Option<CacheEntry> {
        let query = ImageQuery::new(query)?;
        self.read_entry(&query.cache_key()).await
    }

    /// Classifies the stored entry for a query at the current time.
    pub async fn entry_state(&self, query: &str) -> EntryState {
        self.cached_entry(query)
            .await
            .map_or(EntryState::Empty, |entry| {
                entry.state(self.clock.now(), self.config.ttl)
            })
    }

    /// State and age of the stored entry, both measured at one clock reading.
    pub async fn entry_status(&self, query: &str) -> (EntryState, Option<TimeDelta>) {
        let now = self.clock.now();
        self.cached_entry(query)
            .await
            .map_or((EntryState::Empty, None), |entry| {
                (entry.state(now, self.config.ttl), entry.age(now))
            })
    }

    async fn read_entry(&self, key: &CacheKey) -> Option<CacheEntry> {
        let payload = match self.store.get(key.payload_key()).await {
            Ok(Some(raw)) => ImagePayload::from_encoded(raw)?,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read cached image");
                return None;
            }
        };

        let fetched_at = match self.store.get(&key.timestamp_key()).await {
            Ok(raw) => raw.as_deref().and_then(decode_timestamp),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read cache timestamp");
                None
            }
        };

        Some(CacheEntry {
            payload,
            fetched_at,
        })
    }

    async fn write_entry(&self, key: &CacheKey, payload: &ImagePayload, at: DateTime<Utc>) {
        if let Err(e) = self.store.set(key.payload_key(), payload.as_str()).await {
            warn!(key = %key, error = %e, "Failed to cache image");
            return;
        }

        if let Err(e) = self
            .store
            .set(&key.timestamp_key(), &encode_timestamp(at))
            .await
        {
            warn!(key = %key, error = %e, "Failed to cache image timestamp");
            return;
        }

        debug!(key = %key, size = payload.encoded_len(), "Stored image in cache");
    }
}
