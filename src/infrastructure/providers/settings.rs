//! Connection settings shared by the provider clients.

use std::time::Duration;

use crate::domain::entities::Orientation;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Per-provider HTTP settings.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request, including the image download.
    pub timeout: Duration,
    /// Optional orientation filter for searches.
    pub orientation: Option<Orientation>,
}

impl ProviderSettings {
    /// Creates settings for the given API root with default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            orientation: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the orientation filter.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Option<Orientation>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Joins a path onto the API root.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_single_slash() {
        let settings = ProviderSettings::new("https://api.pexels.com/");
        assert_eq!(
            settings.endpoint("/v1/search"),
            "https://api.pexels.com/v1/search"
        );
    }
}
