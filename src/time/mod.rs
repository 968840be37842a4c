pub mod clock;
pub mod holidays;
pub mod session;

pub use clock::{Clock, FixedClock, LocalClockReading, SystemClock};
pub use holidays::{is_trading_day, is_weekend, next_trading_day, parse_holiday, MAX_FORWARD_SEARCH_DAYS};
pub use session::{LunchBreak, SessionTime, MINUTES_PER_DAY};
