pub mod calculator;
pub mod countdown;

pub use calculator::{evaluate, evaluate_all, LONG_HOLIDAY};
pub use countdown::{format_long, format_short, seconds_until, seconds_until_long};
