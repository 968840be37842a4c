/// Market session times (time of day, market local)
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

use crate::error::{MarketClockError, Result};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Time of day at minute resolution, stored as minutes since local midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionTime(u32);

impl SessionTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(MarketClockError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(SessionTime(hour * 60 + minute))
    }

    /// Parse a 24h "HH:MM" string
    pub fn parse(value: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map_err(|_| MarketClockError::InvalidTime(value.to_string()))?;
        Ok(SessionTime(time.hour() * 60 + time.minute()))
    }

    pub fn minute_of_day(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub fn minute(&self) -> u32 {
        self.0 % 60
    }
}

impl FromStr for SessionTime {
    type Err = MarketClockError;

    fn from_str(s: &str) -> Result<Self> {
        SessionTime::parse(s)
    }
}

impl fmt::Display for SessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Lunch break inside a trading session, half-open [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchBreak {
    pub start: SessionTime,
    pub end: SessionTime,
}

impl LunchBreak {
    pub fn contains(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.start.minute_of_day() && minute_of_day < self.end.minute_of_day()
    }
}
