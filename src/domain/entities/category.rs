//! Inspiration categories and their thumbnail search phrases.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category tiles shown for a destination country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Category {
    Beaches,
    Diving,
    CulturalReligious,
    Surfing,
    Hiking,
    TopCafes,
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Beaches,
        Self::Diving,
        Self::CulturalReligious,
        Self::Surfing,
        Self::Hiking,
        Self::TopCafes,
    ];

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beaches => "Beaches",
            Self::Diving => "Diving",
            Self::CulturalReligious => "Cultural & religious",
            Self::Surfing => "Surfing",
            Self::Hiking => "Hiking",
            Self::TopCafes => "Top cafes",
        }
    }

    /// Search phrase used to find a thumbnail for this category in `country`.
    #[must_use]
    pub fn query_for(self, country: &str) -> String {
        let subject = match self {
            Self::Beaches => "best beaches aerial turquoise",
            Self::Diving => "scuba diving reef underwater",
            Self::CulturalReligious => "temples cultural heritage",
            Self::Surfing => "surfing waves surf spot",
            Self::Hiking => "hiking mountain trail viewpoint",
            Self::TopCafes => "specialty coffee cafe interior",
        };
        format!("{country} {subject}")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Some(category) = Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == normalized)
        {
            return Ok(category);
        }

        match normalized.as_str() {
            "beach" => Ok(Self::Beaches),
            "dive" => Ok(Self::Diving),
            "cultural" | "religious" | "culture" => Ok(Self::CulturalReligious),
            "surf" => Ok(Self::Surfing),
            "hike" => Ok(Self::Hiking),
            "cafes" | "cafe" | "coffee" => Ok(Self::TopCafes),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
