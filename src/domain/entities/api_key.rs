//! Provider API key value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret credential for a photo provider, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiKey {
    value: String,
}

impl ApiKey {
    /// Creates a key, returning `None` for blank input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return None;
        }
        Some(Self { value })
    }

    /// Returns key as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked key for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.chars().count() <= 8 {
            return "*".repeat(self.value.chars().count());
        }

        let visible_prefix: String = self.value.chars().take(4).collect();
        format!("{visible_prefix}...")
    }
}

impl TryFrom<String> for ApiKey {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("API key must not be empty")
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> Self {
        key.as_str().to_string()
    }
}

/// Deserializes an optional key, reading blank strings as no key.
pub mod optional {
    use serde::{Deserialize, Deserializer};

    use super::ApiKey;

    /// Deserializes `Option<ApiKey>`; `""` and whitespace become `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ApiKey>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.and_then(ApiKey::new))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
