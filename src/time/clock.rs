/// Wall-clock time source and market-local clock decomposition
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{MarketClockError, Result};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedClock { instant }
    }

    /// Build from an RFC 3339 timestamp such as "2026-01-16T21:00:00Z"
    pub fn parse(value: &str) -> Result<Self> {
        let instant = DateTime::parse_from_rfc3339(value.trim())
            .map_err(|e| MarketClockError::ConfigError(format!("Invalid instant '{}': {}", value, e)))?
            .with_timezone(&Utc);
        Ok(FixedClock::new(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Market-local date and time of one instant. Computed per evaluation, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClockReading {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalClockReading {
    /// Decompose `instant` in `tz`, applying the zone's offset and DST rules
    pub fn at(instant: DateTime<Utc>, tz: &Tz) -> Self {
        let local = instant.with_timezone(tz);

        LocalClockReading {
            date: local.date_naive(),
            weekday: local.weekday(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        }
    }

    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}
