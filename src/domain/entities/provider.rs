//! Photo provider identifiers and search options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External photo-search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Pexels photo search.
    Pexels,
    /// Unsplash photo search.
    Unsplash,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pexels => write!(f, "pexels"),
            Self::Unsplash => write!(f, "unsplash"),
        }
    }
}

/// Requested photo orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Orientation {
    Landscape,
    Portrait,
    #[serde(alias = "squarish")]
    Square,
}

impl Orientation {
    /// Value understood by the Pexels search API.
    #[must_use]
    pub const fn pexels_value(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }

    /// Value understood by the Unsplash search API.
    #[must_use]
    pub const fn unsplash_value(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "squarish",
        }
    }
}
