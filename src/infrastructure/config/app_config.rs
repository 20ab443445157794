//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::domain::entities::{ApiKey, DEFAULT_TTL_HOURS, Orientation, ProviderKind};
use crate::infrastructure::providers::{DEFAULT_TIMEOUT_SECS, PEXELS_API_BASE, UNSPLASH_API_BASE};

const APP_NAME: &str = "wanderlens";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "wanderlens";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Use an in-memory store instead of the on-disk cache.
    #[serde(skip)]
    pub ephemeral: bool,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Directory of the persisted image cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Hours a cached image stays fresh.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,

    /// Timeout for each provider request in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Lookups in flight while priming a batch.
    #[serde(default = "default_prime_concurrency")]
    pub prime_concurrency: usize,

    /// Providers in the order they are tried.
    #[serde(default = "default_provider_order")]
    pub provider_order: Vec<ProviderKind>,

    /// Preferred photo orientation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Pexels settings.
    #[serde(default)]
    pub pexels: PexelsConfig,

    /// Unsplash settings.
    #[serde(default)]
    pub unsplash: UnsplashConfig,
}

/// Pexels configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PexelsConfig {
    /// API key sent in the `Authorization` header.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::domain::entities::api_key::optional::deserialize"
    )]
    pub api_key: Option<ApiKey>,

    /// API root.
    #[serde(default = "default_pexels_base_url")]
    pub base_url: String,
}

impl Default for PexelsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_pexels_base_url(),
        }
    }
}

/// Unsplash configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsplashConfig {
    /// Access key sent as `Client-ID`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::domain::entities::api_key::optional::deserialize"
    )]
    pub access_key: Option<ApiKey>,

    /// API root.
    #[serde(default = "default_unsplash_base_url")]
    pub base_url: String,
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_unsplash_base_url(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    DEFAULT_TTL_HOURS
}

fn default_request_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_prime_concurrency() -> usize {
    crate::application::services::DEFAULT_PRIME_CONCURRENCY
}

fn default_provider_order() -> Vec<ProviderKind> {
    vec![ProviderKind::Pexels, ProviderKind::Unsplash]
}

fn default_pexels_base_url() -> String {
    PEXELS_API_BASE.to_string()
}

fn default_unsplash_base_url() -> String {
    UNSPLASH_API_BASE.to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(cache_dir) = &args.cache_dir {
            self.cache_dir = Some(cache_dir.clone());
        }
        if let Some(ttl_hours) = args.ttl_hours {
            self.ttl_hours = ttl_hours;
        }
        if let Some(key) = args.pexels_key.as_deref().and_then(ApiKey::new) {
            self.pexels.api_key = Some(key);
        }
        if let Some(key) = args.unsplash_key.as_deref().and_then(ApiKey::new) {
            self.unsplash.access_key = Some(key);
        }
        if args.ephemeral {
            self.ephemeral = true;
        }
    }

    /// Provider order with duplicates removed, so each is tried once.
    #[must_use]
    pub fn effective_provider_order(&self) -> Vec<ProviderKind> {
        let mut order = Vec::with_capacity(self.provider_order.len());
        for kind in &self.provider_order {
            if !order.contains(kind) {
                order.push(*kind);
            }
        }
        order
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            ephemeral: false,
            log_level: LogLevel::default(),
            log_path: None,
            cache_dir: None,
            ttl_hours: default_ttl_hours(),
            request_timeout_secs: default_request_timeout(),
            prime_concurrency: default_prime_concurrency(),
            provider_order: default_provider_order(),
            orientation: None,
            pexels: PexelsConfig::default(),
            unsplash: UnsplashConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            ttl_hours = 12
            provider_order = ["unsplash", "pexels"]
            orientation = "landscape"

            [pexels]
            api_key = "pexels-key-123456"

            [unsplash]
            access_key = "unsplash-key-123456"
            base_url = "http://localhost:9000"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.ttl_hours, 12);
        assert_eq!(
            config.provider_order,
            vec![ProviderKind::Unsplash, ProviderKind::Pexels]
        );
        assert_eq!(config.orientation, Some(Orientation::Landscape));
        assert_eq!(
            config.pexels.api_key.as_ref().map(ApiKey::as_str),
            Some("pexels-key-123456")
        );
        assert_eq!(config.pexels.base_url, PEXELS_API_BASE);
        assert_eq!(config.unsplash.base_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.ttl_hours, 48);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.pexels.api_key.is_none());
        assert_eq!(
            config.effective_provider_order(),
            vec![ProviderKind::Pexels, ProviderKind::Unsplash]
        );
    }

    #[test]
    fn test_blank_api_key_reads_as_missing() {
        let config: AppConfig = toml::from_str(
            "ttl_hours = 3\n\n[pexels]\napi_key = \"  \"\n\n[unsplash]\naccess_key = \"unsplash-key-123456\"\n",
        )
        .unwrap();

        assert_eq!(config.ttl_hours, 3);
        assert!(config.pexels.api_key.is_none());
        assert_eq!(
            config.unsplash.access_key.as_ref().map(ApiKey::as_str),
            Some("unsplash-key-123456")
        );
    }

    #[test]
    fn test_unsplash_orientation_name_accepted() {
        let config: AppConfig = toml::from_str("orientation = \"squarish\"\n").unwrap();
        assert_eq!(config.orientation, Some(Orientation::Square));

        let config: AppConfig = toml::from_str("orientation = \"square\"\n").unwrap();
        assert_eq!(config.orientation, Some(Orientation::Square));
    }

    #[test]
    fn test_duplicate_providers_tried_once() {
        let config = AppConfig {
            provider_order: vec![
                ProviderKind::Unsplash,
                ProviderKind::Unsplash,
                ProviderKind::Pexels,
            ],
            ..AppConfig::default()
        };

        assert_eq!(
            config.effective_provider_order(),
            vec![ProviderKind::Unsplash, ProviderKind::Pexels]
        );
    }

    #[test]
    fn test_merge_with_args() {
        let args = CliArgs::try_parse_from([
            "wanderlens",
            "--ttl-hours",
            "6",
            "--pexels-key",
            "from-cli-123456",
            "--ephemeral",
            "get",
            "Bali",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        config.merge_with_args(&args);

        assert_eq!(config.ttl_hours, 6);
        assert!(config.ephemeral);
        assert_eq!(
            config.pexels.api_key.as_ref().map(ApiKey::as_str),
            Some("from-cli-123456")
        );
    }

    #[test]
    fn test_default_config_serializes() {
        let content = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();

        assert_eq!(parsed.ttl_hours, 48);
        assert!(!content.contains("api_key"));
    }
}
