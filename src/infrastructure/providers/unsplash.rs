//! Unsplash photo search client.

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, trace};

use super::dto::UnsplashSearchResponse;
use super::{ProviderSettings, http};
use crate::domain::entities::{ApiKey, ImagePayload, ImageQuery, ProviderKind};
use crate::domain::errors::ProviderError;
use crate::domain::ports::PhotoSearchPort;

/// Public Unsplash API root.
pub const UNSPLASH_API_BASE: &str = "https://api.unsplash.com";

const KIND: ProviderKind = ProviderKind::Unsplash;

/// Unsplash search client authenticated with an access key.
pub struct UnsplashClient {
    client: Client,
    access_key: Option<ApiKey>,
    settings: ProviderSettings,
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("access_key", &self.access_key)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl UnsplashClient {
    /// Creates client against the public API.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(access_key: Option<ApiKey>) -> Result<Self, ProviderError> {
        Self::with_settings(access_key, ProviderSettings::new(UNSPLASH_API_BASE))
    }

    /// Creates client with custom settings.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_settings(
        access_key: Option<ApiKey>,
        settings: ProviderSettings,
    ) -> Result<Self, ProviderError> {
        let client = http::build_client(KIND, &settings)?;
        Ok(Self {
            client,
            access_key,
            settings,
        })
    }
}

#[async_trait]
impl PhotoSearchPort for UnsplashClient {
    fn kind(&self) -> ProviderKind {
        KIND
    }

    async fn search_url(&self, query: &ImageQuery) -> Result<Option<String>, ProviderError> {
        let Some(access_key) = &self.access_key else {
            trace!("Unsplash access key not configured, skipping");
            return Ok(None);
        };

        let mut params = vec![("query", query.as_str()), ("per_page", "1")];
        if let Some(orientation) = self.settings.orientation {
            params.push(("orientation", orientation.unsplash_value()));
        }

        let request = self
            .client
            .get(self.settings.endpoint("search/photos"))
            .header(
                header::AUTHORIZATION,
                format!("Client-ID {}", access_key.as_str()),
            )
            .query(&params);

        let response = http::send(KIND, request).await?;
        let body: UnsplashSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed(KIND, e.to_string()))?;

        let url = body.first_image_url();
        debug!(query = %query, found = url.is_some(), "Unsplash search complete");
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Orientation;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const JPEG: &[u8] = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0";

    fn client(server: &MockServer) -> UnsplashClient {
        UnsplashClient::with_settings(
            ApiKey::new("unsplash-test-key"),
            ProviderSettings::new(server.uri()),
        )
        .unwrap()
    }

    fn query(text: &str) -> ImageQuery {
        ImageQuery::new(text).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_downloads_first_result() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("query", "Japan mountain lake sunrise"))
            .and(query_param("per_page", "1"))
            .and(header("authorization", "Client-ID unsplash-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "results": [{ "urls": {
                    "full": format!("{}/img/full.jpg", server.uri()),
                    "small": format!("{}/img/small.jpg", server.uri())
                } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/img/full.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server)
            .fetch(&query("Japan mountain lake sunrise"))
            .await
            .unwrap();

        assert_eq!(result, Some(ImagePayload::from_bytes(JPEG)));
    }

    #[tokio::test]
    async fn test_search_url_with_orientation() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("orientation", "landscape"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "urls": { "regular": "https://images.unsplash.test/r.jpg" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let unsplash = UnsplashClient::with_settings(
            ApiKey::new("k"),
            ProviderSettings::new(server.uri()).with_orientation(Some(Orientation::Landscape)),
        )
        .unwrap();

        let url = unsplash.search_url(&query("Temples in Japan")).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://images.unsplash.test/r.jpg"));
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client(&server).fetch(&query("Bali")).await;
        assert!(matches!(
            result,
            Err(ProviderError::Status { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_image_download() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "urls": { "small": format!("{}/img/gone.jpg", server.uri()) } }]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/img/gone.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client(&server).fetch(&query("Bali")).await;
        assert!(matches!(
            result,
            Err(ProviderError::Status { status: 404, .. })
        ));
    }
}
