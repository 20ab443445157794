//! Image search query and the cache keys derived from it.

use std::fmt;

const KEY_PREFIX: &str = "img:";
const TIMESTAMP_PREFIX: &str = "img-ts:";

/// Free-text description of the desired image subject.
///
/// The text is kept verbatim; only blank queries are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageQuery(String);

impl ImageQuery {
    /// Creates a query, returning `None` for empty or whitespace-only input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(value))
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the persisted-storage key for this query.
    #[must_use]
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::for_query(self)
    }
}

impl fmt::Display for ImageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Storage key for a cached image, derived from the case-folded query.
///
/// Payloads live under `img:` and timestamps under `img-ts:`, so no query
/// text can produce a key in the other namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    folded: String,
    payload: String,
}

impl CacheKey {
    /// Derives the key for a query.
    #[must_use]
    pub fn for_query(query: &ImageQuery) -> Self {
        let folded = query.as_str().to_lowercase();
        let payload = format!("{KEY_PREFIX}{folded}");
        Self { folded, payload }
    }

    /// Key under which the encoded payload is stored.
    #[must_use]
    pub fn payload_key(&self) -> &str {
        &self.payload
    }

    /// Key under which the fetch timestamp is stored.
    #[must_use]
    pub fn timestamp_key(&self) -> String {
        format!("{TIMESTAMP_PREFIX}{}", self.folded)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.payload)
    }
}
