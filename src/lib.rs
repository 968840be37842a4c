pub mod types;
pub mod error;
pub mod time;
pub mod calendar;
pub mod status;
pub mod config;
pub mod display;

pub use types::*;
pub use calendar::TradingCalendar;
pub use error::{Result, MarketClockError};
pub use status::{evaluate, evaluate_all};
