//! Photo provider error types.

use thiserror::Error;

use crate::domain::entities::ProviderKind;

/// Failure of a single provider lookup.
///
/// These never reach cache callers; the provider chain logs them and
/// continues with the next provider.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ProviderError {
    #[error("request to {provider} failed: {message}")]
    Network {
        provider: ProviderKind,
        message: String,
    },

    #[error("{provider} returned HTTP {status}")]
    Status { provider: ProviderKind, status: u16 },

    #[error("malformed {provider} response: {message}")]
    Malformed {
        provider: ProviderKind,
        message: String,
    },

    #[error("undecodable image from {provider}: {message}")]
    Decode {
        provider: ProviderKind,
        message: String,
    },

    #[error("failed to create {provider} HTTP client: {message}")]
    Client {
        provider: ProviderKind,
        message: String,
    },
}

impl ProviderError {
    /// Creates network error.
    #[must_use]
    pub fn network(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Creates malformed response error.
    #[must_use]
    pub fn malformed(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Malformed {
            provider,
            message: message.into(),
        }
    }

    /// Creates image decode error.
    #[must_use]
    pub fn decode(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Decode {
            provider,
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Client {
            provider,
            message: message.into(),
        }
    }

    /// Returns the provider that failed.
    #[must_use]
    pub const fn provider(&self) -> ProviderKind {
        match self {
            Self::Network { provider, .. }
            | Self::Status { provider, .. }
            | Self::Malformed { provider, .. }
            | Self::Decode { provider, .. }
            | Self::Client { provider, .. } => *provider,
        }
    }

    /// Returns whether the provider refused because of its rate limit.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status { status: 429, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ProviderError::Status {
            provider: ProviderKind::Unsplash,
            status: 403,
        };
        assert_eq!(err.to_string(), "unsplash returned HTTP 403");
        assert_eq!(err.provider(), ProviderKind::Unsplash);
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_rate_limited() {
        let err = ProviderError::Status {
            provider: ProviderKind::Pexels,
            status: 429,
        };
        assert!(err.is_rate_limited());
    }
}
