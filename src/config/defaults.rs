/// Built-in market table, used when no config file is present
use crate::types::{Config, MarketConfig};

fn market(name: &str, timezone: &str, open: &str, close: &str, lunch: Option<(&str, &str)>) -> MarketConfig {
    MarketConfig {
        name: name.to_string(),
        timezone: timezone.to_string(),
        open: open.to_string(),
        close: close.to_string(),
        lunch_start: lunch.map(|(start, _)| start.to_string()),
        lunch_end: lunch.map(|(_, end)| end.to_string()),
        holidays: Vec::new(),
    }
}

/// Major exchanges, regular sessions only, no holidays
pub fn default_markets() -> Vec<MarketConfig> {
    vec![
        market("NYSE / NASDAQ", "America/New_York", "09:30", "16:00", None),
        market("LSE (London)", "Europe/London", "08:00", "16:30", None),
        market("TSE (Tokyo)", "Asia/Tokyo", "09:00", "15:00", Some(("11:30", "12:30"))),
        market("HKEX (Hong Kong)", "Asia/Hong_Kong", "09:30", "16:00", Some(("12:00", "13:00"))),
        market("SSE (Shanghai)", "Asia/Shanghai", "09:30", "15:00", Some(("11:30", "13:00"))),
        market("FSE (Frankfurt)", "Europe/Berlin", "09:00", "17:30", None),
        market("ASX (Sydney)", "Australia/Sydney", "10:00", "16:00", None),
    ]
}

pub fn default_config() -> Config {
    Config {
        log_level: "info".to_string(),
        tick_interval_ms: 1000,
        clear_screen: true,
        markets: default_markets(),
    }
}
