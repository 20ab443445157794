//! HTTP plumbing shared by the provider clients.

use reqwest::{Client, RequestBuilder, Response};
use tracing::trace;

use super::ProviderSettings;
use crate::domain::entities::{ImagePayload, ProviderKind};
use crate::domain::errors::ProviderError;

const USER_AGENT: &str = concat!("wanderlens/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for both search and download requests.
pub(super) fn build_client(
    provider: ProviderKind,
    settings: &ProviderSettings,
) -> Result<Client, ProviderError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(settings.timeout)
        .build()
        .map_err(|e| ProviderError::client(provider, e.to_string()))
}

/// Sends a request and rejects non-success statuses.
pub(super) async fn send(
    provider: ProviderKind,
    request: RequestBuilder,
) -> Result<Response, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| network_error(provider, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
        });
    }

    Ok(response)
}

/// Downloads an image and encodes it, rejecting bodies that are not images.
pub(super) async fn download_payload(
    provider: ProviderKind,
    client: &Client,
    url: &str,
) -> Result<ImagePayload, ProviderError> {
    let response = send(provider, client.get(url)).await?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| network_error(provider, &e))?;

    if bytes.is_empty() {
        return Err(ProviderError::decode(provider, "empty image body"));
    }

    let format =
        image::guess_format(&bytes).map_err(|e| ProviderError::decode(provider, e.to_string()))?;

    trace!(%provider, ?format, size = bytes.len(), "Downloaded image");

    Ok(ImagePayload::from_bytes(&bytes))
}

fn network_error(provider: ProviderKind, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::network(provider, "request timed out")
    } else if e.is_connect() {
        ProviderError::network(provider, "failed to connect")
    } else if e.is_decode() || e.is_body() {
        ProviderError::network(provider, format!("failed to read body: {e}"))
    } else {
        ProviderError::network(provider, e.to_string())
    }
}
