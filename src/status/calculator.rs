/// Market status calculator
use chrono::{DateTime, Utc};
use tracing::warn;

use super::countdown::{format_long, format_short, seconds_until, seconds_until_long};
use crate::calendar::TradingCalendar;
use crate::time::{next_trading_day, LocalClockReading, MAX_FORWARD_SEARCH_DAYS, MINUTES_PER_DAY};
use crate::types::{Boundary, MarketState, MarketStatus};

/// Shown when no trading day is found within the forward search bound
pub const LONG_HOLIDAY: &str = "Long Holiday";

/// State of `calendar` at `now` and the countdown to its next boundary.
///
/// Pure: the same (calendar, instant) pair always gives the same result.
pub fn evaluate(calendar: &TradingCalendar, now: DateTime<Utc>) -> MarketStatus {
    let reading = LocalClockReading::at(now, &calendar.timezone);
    let minute = reading.minute_of_day();
    let second = reading.second;

    let open = calendar.open.minute_of_day();
    let close = calendar.close.minute_of_day();

    if calendar.is_trading_day(reading.date) {
        match calendar.session_at(minute) {
            // Pre-market
            MarketState::Closed if minute < open => {
                return same_day(MarketState::Closed, Boundary::Open, open, minute, second);
            }
            MarketState::Lunch => {
                // session_at only reports Lunch when a lunch break exists
                let end = calendar.lunch.map_or(close, |lunch| lunch.end.minute_of_day());
                return same_day(MarketState::Lunch, Boundary::LunchEnd, end, minute, second);
            }
            MarketState::Open => {
                return match calendar.lunch {
                    Some(lunch) if minute < lunch.start.minute_of_day() => {
                        let start = lunch.start.minute_of_day();
                        same_day(MarketState::Open, Boundary::LunchStart, start, minute, second)
                    }
                    _ => same_day(MarketState::Open, Boundary::Close, close, minute, second),
                };
            }
            MarketState::Closed => {}
        }
    }

    // Weekend, holiday or post-market
    match next_trading_day(reading.date, &calendar.holidays, MAX_FORWARD_SEARCH_DAYS) {
        Some((_, days_ahead)) => {
            let days_between = days_ahead - 1;
            let wait = (MINUTES_PER_DAY - minute) + days_between * MINUTES_PER_DAY + open;
            MarketStatus {
                state: MarketState::Closed,
                next_boundary: Some(Boundary::Open),
                seconds_until_transition: Some(seconds_until_long(wait, second)),
                formatted_countdown: format_long(wait, second),
            }
        }
        None => {
            warn!(
                "{}: no trading day within {} days of {}",
                calendar.name, MAX_FORWARD_SEARCH_DAYS, reading.date
            );
            MarketStatus {
                state: MarketState::Closed,
                next_boundary: None,
                seconds_until_transition: None,
                formatted_countdown: LONG_HOLIDAY.to_string(),
            }
        }
    }
}

/// Evaluate every calendar at the same instant, keeping their order
pub fn evaluate_all(calendars: &[TradingCalendar], now: DateTime<Utc>) -> Vec<MarketStatus> {
    calendars.iter().map(|calendar| evaluate(calendar, now)).collect()
}

fn same_day(state: MarketState, boundary: Boundary, target: u32, minute: u32, second: u32) -> MarketStatus {
    MarketStatus {
        state,
        next_boundary: Some(boundary),
        seconds_until_transition: Some(seconds_until(target, minute, second)),
        formatted_countdown: format_short(target, minute, second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{LunchBreak, SessionTime};
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Tokyo;
    use chrono_tz::Australia::Sydney;
    use chrono_tz::Tz;
    use std::collections::HashSet;

    fn time(value: &str) -> SessionTime {
        SessionTime::parse(value).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nyse(holidays: HashSet<NaiveDate>) -> TradingCalendar {
        TradingCalendar::new("NYSE", New_York, time("09:30"), time("16:00"), None, holidays).unwrap()
    }

    fn tse() -> TradingCalendar {
        let lunch = LunchBreak { start: time("11:30"), end: time("12:30") };
        TradingCalendar::new("TSE", Tokyo, time("09:00"), time("15:00"), Some(lunch), HashSet::new())
            .unwrap()
    }

    fn at(tz: Tz, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        tz.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_open_exactly_at_open_minute() {
        // Wednesday 09:30:00
        let status = evaluate(&nyse(HashSet::new()), at(New_York, 2025, 1, 15, 9, 30, 0));
        assert_eq!(status.state, MarketState::Open);
        assert_eq!(status.next_boundary, Some(Boundary::Close));
        assert_eq!(status.formatted_countdown, "6h 30m 0s");
        assert_eq!(status.seconds_until_transition, Some(6 * 3600 + 30 * 60));
    }

    #[test]
    fn test_closed_exactly_at_close_minute() {
        // Wednesday 16:00:00, opens Thursday 09:30
        let status = evaluate(&nyse(HashSet::new()), at(New_York, 2025, 1, 15, 16, 0, 0));
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.next_boundary, Some(Boundary::Open));
        assert_eq!(status.formatted_countdown, "17h 30m 0s");
        assert_eq!(status.seconds_until_transition, Some(17 * 3600 + 30 * 60));
    }

    #[test]
    fn test_pre_market() {
        let status = evaluate(&nyse(HashSet::new()), at(New_York, 2025, 1, 15, 9, 29, 59));
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.next_boundary, Some(Boundary::Open));
        assert_eq!(status.formatted_countdown, "0h 0m 1s");
        assert_eq!(status.seconds_until_transition, Some(1));
    }

    #[test]
    fn test_lunch_edges() {
        let calendar = tse();

        let before = evaluate(&calendar, at(Tokyo, 2025, 1, 15, 10, 0, 0));
        assert_eq!(before.state, MarketState::Open);
        assert_eq!(before.next_boundary, Some(Boundary::LunchStart));
        assert_eq!(before.formatted_countdown, "1h 30m 0s");

        let start = evaluate(&calendar, at(Tokyo, 2025, 1, 15, 11, 30, 0));
        assert_eq!(start.state, MarketState::Lunch);
        assert_eq!(start.next_boundary, Some(Boundary::LunchEnd));
        assert_eq!(start.formatted_countdown, "1h 0m 0s");

        let end = evaluate(&calendar, at(Tokyo, 2025, 1, 15, 12, 30, 0));
        assert_eq!(end.state, MarketState::Open);
        assert_eq!(end.next_boundary, Some(Boundary::Close));
        assert_eq!(end.formatted_countdown, "2h 30m 0s");
    }

    #[test]
    fn test_lunch_ending_at_close() {
        let lunch = LunchBreak { start: time("14:00"), end: time("15:00") };
        let calendar =
            TradingCalendar::new("X", Tokyo, time("09:00"), time("15:00"), Some(lunch), HashSet::new())
                .unwrap();
        let status = evaluate(&calendar, at(Tokyo, 2025, 1, 15, 15, 0, 0));
        assert_eq!(status.state, MarketState::Closed);
    }

    #[test]
    fn test_saturday_waits_for_monday() {
        // Saturday 12:00:00: rest of Saturday + Sunday + open
        let status = evaluate(&nyse(HashSet::new()), at(New_York, 2025, 1, 18, 12, 0, 0));
        let wait = (1440 - 720) + 1440 + 570;
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.formatted_countdown, format_long(wait, 0));
        assert_eq!(status.formatted_countdown, "1d 21h 30m");
        assert_eq!(status.seconds_until_transition, Some(wait as u64 * 60));
    }

    #[test]
    fn test_friday_after_close_skips_weekend() {
        // Friday 17:00:30
        let status = evaluate(&nyse(HashSet::new()), at(New_York, 2025, 1, 17, 17, 0, 30));
        let wait = (1440 - 1020) + 2 * 1440 + 570;
        assert_eq!(status.seconds_until_transition, Some(wait as u64 * 60 - 30));
        assert_eq!(status.formatted_countdown, "2d 16h 29m");
    }

    #[test]
    fn test_monday_holiday_waits_for_tuesday() {
        let holidays: HashSet<_> = [date(2025, 1, 20)].into_iter().collect();
        // Sunday 22:00:00
        let status = evaluate(&nyse(holidays), at(New_York, 2025, 1, 19, 22, 0, 0));
        let wait = (1440 - 1320) + 1440 + 570;
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.seconds_until_transition, Some(wait as u64 * 60));
        assert_eq!(status.formatted_countdown, "1d 11h 30m");
    }

    #[test]
    fn test_holiday_during_trading_hours_is_closed() {
        let holidays: HashSet<_> = [date(2025, 1, 15)].into_iter().collect();
        let status = evaluate(&nyse(holidays), at(New_York, 2025, 1, 15, 11, 0, 0));
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.next_boundary, Some(Boundary::Open));
        // Rest of Wednesday + Thursday open
        assert_eq!(status.seconds_until_transition, Some(((1440 - 660) + 570) as u64 * 60));
    }

    #[test]
    fn test_long_holiday_fallback() {
        let holidays: HashSet<_> = (13..=31).map(|d| date(2025, 1, d)).collect();
        let status = evaluate(&nyse(holidays), at(New_York, 2025, 1, 14, 17, 0, 0));
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.next_boundary, None);
        assert_eq!(status.seconds_until_transition, None);
        assert_eq!(status.formatted_countdown, LONG_HOLIDAY);
    }

    #[test]
    fn test_weekend_across_dst_change() {
        // Sydney leaves DST on Sunday 2025-04-06; the wait is counted in local minutes
        let calendar =
            TradingCalendar::new("ASX", Sydney, time("10:00"), time("16:00"), None, HashSet::new())
                .unwrap();
        let status = evaluate(&calendar, at(Sydney, 2025, 4, 5, 12, 0, 0));
        assert_eq!(status.state, MarketState::Closed);
        assert_eq!(status.formatted_countdown, "1d 22h 0m");
    }

    #[test]
    fn test_state_matches_session_over_a_trading_day() {
        let calendar = tse();
        for minute in 0..1440u32 {
            let now = at(Tokyo, 2025, 1, 15, minute / 60, minute % 60, 0);
            let status = evaluate(&calendar, now);
            assert_eq!(status.state, calendar.session_at(minute), "minute {}", minute);
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let calendar = tse();
        let now = at(Tokyo, 2025, 1, 15, 11, 45, 17);
        assert_eq!(evaluate(&calendar, now), evaluate(&calendar, now));
    }

    #[test]
    fn test_every_minute_of_a_week_is_well_formed() {
        let calendars = [nyse(HashSet::new()), tse()];
        let start = at(New_York, 2025, 1, 13, 0, 0, 7);
        for step in 0..(7 * 1440) {
            let now = start + chrono::Duration::minutes(step);
            for status in evaluate_all(&calendars, now) {
                let seconds = status.seconds_until_transition.unwrap();
                assert!(seconds > 0 && seconds <= 4 * 86_400);
                assert!(status.next_boundary.is_some());
            }
        }
    }

    #[test]
    fn test_evaluate_all_keeps_order() {
        let calendars = [nyse(HashSet::new()), tse()];
        // 10:00 in New York is 00:00 next day in Tokyo
        let statuses = evaluate_all(&calendars, at(New_York, 2025, 1, 15, 10, 0, 0));
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].state, MarketState::Open);
        assert_eq!(statuses[1].state, MarketState::Closed);
        assert_eq!(statuses[1].formatted_countdown, "9h 0m 0s");
    }
}
