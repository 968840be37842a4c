/// Text and JSON rendering of the market board
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::calendar::TradingCalendar;
use crate::status::evaluate;
use crate::types::{Boundary, MarketState, MarketStatus};

const NAME_WIDTH: usize = 20;
const ZONE_WIDTH: usize = 20;
const STATE_WIDTH: usize = 8;

/// "HH:MM:SS UTC | HH:MM:SS local"
pub fn clock_line<Z: TimeZone>(now: DateTime<Utc>, local: &Z) -> String
where
    Z::Offset: std::fmt::Display,
{
    format!(
        "{} UTC | {} local",
        now.format("%H:%M:%S"),
        now.with_timezone(local).format("%H:%M:%S")
    )
}

pub fn header() -> String {
    // Column titles line up with render_row
    format!(
        "{:<name$} {:<zone$} {:<state$} {}",
        "Market",
        "Timezone",
        "Status",
        "Next",
        name = NAME_WIDTH,
        zone = ZONE_WIDTH,
        state = STATE_WIDTH
    )
}

/// One board row for an already evaluated market
pub fn render_row(calendar: &TradingCalendar, status: &MarketStatus) -> String {
    format!(
        "{:<name$} {:<zone$} {:<state$} {}",
        calendar.name,
        calendar.timezone.name(),
        status.state.as_str(),
        status.message(),
        name = NAME_WIDTH,
        zone = ZONE_WIDTH,
        state = STATE_WIDTH
    )
}

/// Full board: clock line, header and one row per market
pub fn render_board<Z: TimeZone>(calendars: &[TradingCalendar], now: DateTime<Utc>, local: &Z) -> String
where
    Z::Offset: std::fmt::Display,
{
    let mut lines = Vec::with_capacity(calendars.len() + 3);
    lines.push(clock_line(now, local));
    lines.push(String::new());
    lines.push(header());
    for calendar in calendars {
        lines.push(render_row(calendar, &evaluate(calendar, now)));
    }
    lines.join("\n")
}

/// Machine-readable view of one market
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub name: String,
    pub timezone: String,
    pub local_time: String,
    pub state: MarketState,
    pub next_boundary: Option<Boundary>,
    pub seconds_until_transition: Option<u64>,
    pub countdown: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub utc: DateTime<Utc>,
    pub markets: Vec<MarketSnapshot>,
}

pub fn snapshot(calendars: &[TradingCalendar], now: DateTime<Utc>) -> BoardSnapshot {
    let markets = calendars
        .iter()
        .map(|calendar| {
            let status = evaluate(calendar, now);
            MarketSnapshot {
                name: calendar.name.clone(),
                timezone: calendar.timezone.name().to_string(),
                local_time: now.with_timezone(&calendar.timezone).format("%a %Y-%m-%d %H:%M:%S").to_string(),
                state: status.state,
                next_boundary: status.next_boundary,
                seconds_until_transition: status.seconds_until_transition,
                message: status.message(),
                countdown: status.formatted_countdown,
            }
        })
        .collect();

    BoardSnapshot { utc: now, markets }
}
