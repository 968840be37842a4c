/// Validated per-market trading calendar
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::collections::HashSet;

use crate::error::{MarketClockError, Result};
use crate::time::{is_trading_day, parse_holiday, LunchBreak, SessionTime};
use crate::types::{MarketConfig, MarketState};

/// Static trading calendar of one market. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingCalendar {
    pub name: String,
    pub timezone: Tz,
    pub open: SessionTime,
    pub close: SessionTime,
    pub lunch: Option<LunchBreak>,
    pub holidays: HashSet<NaiveDate>,
}

impl TradingCalendar {
    /// Build a calendar, rejecting sessions that are empty or run overnight
    /// and lunch breaks outside [open, close).
    pub fn new(
        name: impl Into<String>,
        timezone: Tz,
        open: SessionTime,
        close: SessionTime,
        lunch: Option<LunchBreak>,
        holidays: HashSet<NaiveDate>,
    ) -> Result<Self> {
        let name = name.into();

        if open >= close {
            return Err(MarketClockError::InvalidSession {
                market: name,
                reason: format!("open {} must be before close {}", open, close),
            });
        }

        if let Some(lunch) = lunch {
            if lunch.start >= lunch.end {
                return Err(MarketClockError::InvalidLunchBreak {
                    market: name,
                    reason: format!("start {} must be before end {}", lunch.start, lunch.end),
                });
            }
            if lunch.start < open || lunch.end > close {
                return Err(MarketClockError::InvalidLunchBreak {
                    market: name,
                    reason: format!(
                        "{}-{} is outside trading hours {}-{}",
                        lunch.start, lunch.end, open, close
                    ),
                });
            }
        }

        Ok(TradingCalendar {
            name,
            timezone,
            open,
            close,
            lunch,
            holidays,
        })
    }

    /// Validate one config entry
    pub fn from_config(entry: &MarketConfig) -> Result<Self> {
        let timezone: Tz = entry
            .timezone
            .parse()
            .map_err(|_| MarketClockError::UnknownTimezone {
                market: entry.name.clone(),
                timezone: entry.timezone.clone(),
            })?;

        // Session hours
        let open = SessionTime::parse(&entry.open)?;
        let close = SessionTime::parse(&entry.close)?;

        let lunch = match (&entry.lunch_start, &entry.lunch_end) {
            (Some(start), Some(end)) => Some(LunchBreak {
                start: SessionTime::parse(start)?,
                end: SessionTime::parse(end)?,
            }),
            (None, None) => None,
            _ => {
                return Err(MarketClockError::InvalidLunchBreak {
                    market: entry.name.clone(),
                    reason: "lunch_start and lunch_end must be given together".to_string(),
                })
            }
        };

        // Holidays
        let mut holidays = HashSet::with_capacity(entry.holidays.len());
        for value in &entry.holidays {
            let date = parse_holiday(value).ok_or_else(|| MarketClockError::InvalidHoliday {
                market: entry.name.clone(),
                value: value.clone(),
            })?;
            holidays.insert(date);
        }

        TradingCalendar::new(entry.name.clone(), timezone, open, close, lunch, holidays)
    }

    /// Weekday that is not a listed holiday
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        is_trading_day(date, &self.holidays)
    }

    /// Session state at a market-local minute of a trading day
    pub fn session_at(&self, minute_of_day: u32) -> MarketState {
        if minute_of_day < self.open.minute_of_day() || minute_of_day >= self.close.minute_of_day() {
            return MarketState::Closed;
        }

        match self.lunch {
            Some(lunch) if lunch.contains(minute_of_day) => MarketState::Lunch,
            _ => MarketState::Open,
        }
    }
}
