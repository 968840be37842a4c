/// Core type definitions for the market clock
use serde::{Deserialize, Serialize};

/// Market trading state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketState {
    Open,
    Lunch,
    Closed,
}

impl MarketState {
    pub fn as_str(&self) -> &str {
        match self {
            MarketState::Open => "Open",
            MarketState::Lunch => "Lunch",
            MarketState::Closed => "Closed",
        }
    }
}

/// Minute-of-day at which a market changes state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Open,
    LunchStart,
    LunchEnd,
    Close,
}

/// Result of evaluating one market at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketStatus {
    pub state: MarketState,
    /// None only for the long holiday fallback
    pub next_boundary: Option<Boundary>,
    pub seconds_until_transition: Option<u64>,
    pub formatted_countdown: String,
}

impl MarketStatus {
    /// Human message shown next to the state
    pub fn message(&self) -> String {
        match self.next_boundary {
            Some(Boundary::Close) => format!("Closes in {}", self.formatted_countdown),
            Some(Boundary::LunchStart) => format!("Lunch in {}", self.formatted_countdown),
            Some(Boundary::Open) | Some(Boundary::LunchEnd) => {
                format!("Opens in {}", self.formatted_countdown)
            }
            None => self.formatted_countdown.clone(),
        }
    }
}

/// One market entry as authored in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub name: String,
    pub timezone: String,
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub lunch_start: Option<String>,
    #[serde(default)]
    pub lunch_end: Option<String>,
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Configuration for the market clock
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Logging
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // Render Loop
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,

    // Markets, in display order
    #[serde(default)]
    pub markets: Vec<MarketConfig>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_clear_screen() -> bool {
    true
}
