//! Search response shapes for the photo APIs.
//!
//! Only the fields needed to pick an image URL are modelled; everything
//! else in the responses is ignored.

use serde::Deserialize;

/// Pexels `/v1/search` response.
#[derive(Debug, Deserialize)]
pub struct PexelsSearchResponse {
    #[serde(default)]
    pub photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsPhoto {
    #[serde(default)]
    pub src: Option<PexelsSource>,
}

/// Size variants of a Pexels photo.
#[derive(Debug, Default, Deserialize)]
pub struct PexelsSource {
    #[serde(default)]
    pub large2x: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

impl PexelsSearchResponse {
    /// URL of the first photo, preferring `large2x`, then `large`, then `original`.
    #[must_use]
    pub fn first_image_url(self) -> Option<String> {
        let src = self.photos.into_iter().next()?.src?;
        first_non_empty([src.large2x, src.large, src.original])
    }
}

/// Unsplash `/search/photos` response.
#[derive(Debug, Deserialize)]
pub struct UnsplashSearchResponse {
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashPhoto {
    #[serde(default)]
    pub urls: Option<UnsplashUrls>,
}

/// Size variants of an Unsplash photo.
#[derive(Debug, Default, Deserialize)]
pub struct UnsplashUrls {
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
}

impl UnsplashSearchResponse {
    /// URL of the first photo, preferring `full`, then `regular`, then `small`.
    #[must_use]
    pub fn first_image_url(self) -> Option<String> {
        let urls = self.results.into_iter().next()?.urls?;
        first_non_empty([urls.full, urls.regular, urls.small])
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
}
