//! Port for reading the current time.

use chrono::{DateTime, Utc};

/// Source of "now" for freshness checks.
pub trait ClockPort: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}
