//! Category thumbnails for destination pages.

use std::sync::Arc;

use tracing::debug;

use super::ImageCacheService;
use crate::domain::entities::{Category, ImagePayload};

/// Resolves category tiles to cached images.
#[derive(Debug, Clone)]
pub struct CategoryImages {
    cache: Arc<ImageCacheService>,
}

impl CategoryImages {
    /// Creates new category image lookup over the shared cache.
    #[must_use]
    pub const fn new(cache: Arc<ImageCacheService>) -> Self {
        Self { cache }
    }

    /// Returns the thumbnail for one category of a country.
    pub async fn thumbnail(&self, country: &str, category: Category) -> Option<ImagePayload> {
        self.cache.get_image(&category.query_for(country)).await
    }

    /// Primes every category thumbnail for a country.
    pub async fn prime_country(&self, country: &str) -> Vec<(Category, Option<ImagePayload>)> {
        debug!(country, "Priming category thumbnails");
        let queries = Category::ALL.map(|category| category.query_for(country));
        let results = self.cache.prime_images(queries).await;

        Category::ALL
            .into_iter()
            .zip(results)
            .map(|(category, (_, payload))| (category, payload))
            .collect()
    }
}
