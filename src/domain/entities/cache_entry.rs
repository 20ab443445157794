//! Cached image entries and their freshness.

use chrono::{DateTime, TimeDelta, Utc};

use super::ImagePayload;

/// Default freshness window for cached images.
pub const DEFAULT_TTL_HOURS: u64 = 48;

/// Per-key lifecycle of a cached image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Nothing has been stored for the key yet.
    Empty,
    /// Stored and younger than the TTL.
    Fresh,
    /// Stored but older than the TTL (or missing its timestamp).
    Stale,
}

impl std::fmt::Display for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Fresh => write!(f, "fresh"),
            Self::Stale => write!(f, "stale"),
        }
    }
}

/// A stored payload together with the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The encoded image.
    pub payload: ImagePayload,
    /// When the payload was fetched; `None` if the timestamp was lost.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    /// Creates an entry fetched at the given instant.
    #[must_use]
    pub const fn new(payload: ImagePayload, fetched_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            fetched_at: Some(fetched_at),
        }
    }

    /// Returns true if `now - fetched_at < ttl`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.fetched_at
            .is_some_and(|fetched_at| now.signed_duration_since(fetched_at) < ttl)
    }

    /// Classifies the entry at `now`.
    #[must_use]
    pub fn state(&self, now: DateTime<Utc>, ttl: TimeDelta) -> EntryState {
        if self.is_fresh(now, ttl) {
            EntryState::Fresh
        } else {
            EntryState::Stale
        }
    }

    /// Time elapsed since the fetch, if known.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.fetched_at
            .map(|fetched_at| now.signed_duration_since(fetched_at))
    }
}

/// Converts a TTL in hours into a duration, saturating on overflow.
#[must_use]
pub fn ttl_from_hours(hours: u64) -> TimeDelta {
    i64::try_from(hours)
        .ok()
        .and_then(TimeDelta::try_hours)
        .unwrap_or(TimeDelta::MAX)
}

/// Serializes a fetch timestamp as milliseconds since the Unix epoch.
#[must_use]
pub fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Parses a timestamp written by [`encode_timestamp`].
#[must_use]
pub fn decode_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
