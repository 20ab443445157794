//! Wall-clock time source.

use chrono::{DateTime, Utc};

use crate::domain::ports::ClockPort;

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
