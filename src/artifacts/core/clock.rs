//! Commit clocks
//!
//! Commit identifiers and timestamps are derived from wall-clock time. The clock
//! is a seam so that a repository can be pinned to a fixed instant, the same way
//! `GIT_AUTHOR_DATE` pins author dates in git.

use chrono::{DateTime, FixedOffset};

/// Format accepted for pinned dates besides RFC 2822
pub const PINNED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        FixedClock(instant)
    }

    /// Parse a pinned date in RFC 2822 or `%Y-%m-%d %H:%M:%S %z` form
    pub fn try_parse(date: &str) -> anyhow::Result<Self> {
        let instant = DateTime::parse_from_rfc2822(date)
            .or_else(|_| DateTime::parse_from_str(date, PINNED_DATE_FORMAT))
            .map_err(|_| anyhow::anyhow!("invalid date: {date}"))?;

        Ok(FixedClock(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
