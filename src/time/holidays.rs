/// Holiday calendar helpers
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Upper bound on the forward search for the next trading day
pub const MAX_FORWARD_SEARCH_DAYS: u32 = 10;

/// Parse a holiday written as "YYYY-MM-DD"
pub fn parse_holiday(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn is_weekend(weekday: Weekday) -> bool {
    weekday == Weekday::Sat || weekday == Weekday::Sun
}

/// Check if a date is a trading day (not weekend, not holiday)
pub fn is_trading_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    if is_weekend(date.weekday()) {
        return false;
    }

    !holidays.contains(&date)
}

/// Next trading day strictly after `from_date`, searching at most `max_days` days ahead.
///
/// Steps by calendar date, so DST transitions can never skip or repeat a day.
/// Returns the date together with how many days ahead of `from_date` it is.
pub fn next_trading_day(
    from_date: NaiveDate,
    holidays: &HashSet<NaiveDate>,
    max_days: u32,
) -> Option<(NaiveDate, u32)> {
    let mut date = from_date;

    for days_ahead in 1..=max_days {
        date = date.succ_opt()?;
        if is_trading_day(date, holidays) {
            return Some((date, days_ahead));
        }
    }

    None
}
