//! End-to-end lookups through the configured context using wiremock.

use serde_json::json;
use tempfile::TempDir;
use wanderlens::AppContext;
use wanderlens::domain::entities::{ApiKey, EntryState, ImagePayload, ProviderKind};
use wanderlens::infrastructure::AppConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01";

fn config(pexels: &MockServer, unsplash: &MockServer, cache_dir: &TempDir) -> AppConfig {
    let mut config = AppConfig {
        cache_dir: Some(cache_dir.path().to_path_buf()),
        ..AppConfig::default()
    };
    config.pexels.api_key = ApiKey::new("pexels-test-key");
    config.pexels.base_url = pexels.uri();
    config.unsplash.access_key = ApiKey::new("unsplash-test-key");
    config.unsplash.base_url = unsplash.uri();
    config
}

/// Repeated lookup within the TTL is served from disk.
#[tokio::test]
async fn test_second_lookup_hits_cache() {
    let pexels = MockServer::start().await;
    let unsplash = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "Japan mountain lake sunrise"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "photos": [{ "src": { "large2x": format!("{}/photos/fuji.png", pexels.uri()) } }]
        })))
        .expect(1)
        .mount(&pexels)
        .await;

    Mock::given(method("GET"))
        .and(path("/photos/fuji.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG))
        .expect(1)
        .mount(&pexels)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&unsplash)
        .await;

    let context = AppContext::from_config(config(&pexels, &unsplash, &cache_dir))
        .await
        .unwrap();

    let first = context
        .images()
        .get_image("Japan mountain lake sunrise")
        .await;
    let second = context
        .images()
        .get_image("JAPAN mountain lake sunrise")
        .await;

    assert_eq!(first, Some(ImagePayload::from_bytes(PNG)));
    assert_eq!(second, first);
    assert_eq!(
        context
            .images()
            .entry_state("japan mountain lake sunrise")
            .await,
        EntryState::Fresh
    );
}

/// Pexels outage falls back to Unsplash with the same query.
#[tokio::test]
async fn test_falls_back_to_unsplash() {
    let pexels = MockServer::start().await;
    let unsplash = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&pexels)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "Bali turquoise beach aerial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "urls": { "regular": format!("{}/img/bali.png", unsplash.uri()) } }]
        })))
        .expect(1)
        .mount(&unsplash)
        .await;

    Mock::given(method("GET"))
        .and(path("/img/bali.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG))
        .expect(1)
        .mount(&unsplash)
        .await;

    let context = AppContext::from_config(config(&pexels, &unsplash, &cache_dir))
        .await
        .unwrap();

    let image = context
        .images()
        .get_image("Bali turquoise beach aerial")
        .await;
    assert_eq!(image, Some(ImagePayload::from_bytes(PNG)));
}

/// A cache written by one run is read by the next.
#[tokio::test]
async fn test_cache_persists_between_contexts() {
    let pexels = MockServer::start().await;
    let unsplash = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "urls": { "full": format!("{}/img/kyoto.png", unsplash.uri()) } }]
        })))
        .expect(1)
        .mount(&unsplash)
        .await;

    Mock::given(method("GET"))
        .and(path("/img/kyoto.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG))
        .expect(1)
        .mount(&unsplash)
        .await;

    let mut first_config = config(&pexels, &unsplash, &cache_dir);
    first_config.provider_order = vec![ProviderKind::Unsplash];
    let first_run = AppContext::from_config(first_config.clone()).await.unwrap();
    assert!(first_run.images().get_image("Kyoto shrine").await.is_some());
    drop(first_run);

    let second_run = AppContext::from_config(first_config).await.unwrap();
    assert_eq!(
        second_run.images().get_image("Kyoto shrine").await,
        Some(ImagePayload::from_bytes(PNG))
    );
}

/// Priming a batch where one query fails everywhere still resolves the rest.
#[tokio::test]
async fn test_prime_batch_with_one_failure() {
    let pexels = MockServer::start().await;
    let unsplash = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "broken query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&pexels)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "photos": [{ "src": { "large": format!("{}/photos/ok.png", pexels.uri()) } }]
        })))
        .mount(&pexels)
        .await;

    Mock::given(method("GET"))
        .and(path("/photos/ok.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG))
        .mount(&pexels)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&unsplash)
        .await;

    let context = AppContext::from_config(config(&pexels, &unsplash, &cache_dir))
        .await
        .unwrap();

    let results = context
        .images()
        .prime_images(["Lisbon tram", "broken query", "Porto river"])
        .await;

    let resolved: Vec<bool> = results.iter().map(|(_, p)| p.is_some()).collect();
    assert_eq!(resolved, vec![true, false, true]);
}
