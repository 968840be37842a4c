/// Configuration loading from TOML file
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::defaults::default_config;
use crate::calendar::TradingCalendar;
use crate::error::{MarketClockError, Result};
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| MarketClockError::ConfigError(format!("Failed to read config file: {}", e)))?;

    parse_config(&content)
}

/// Where the running configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => write!(f, "built-in market table"),
        }
    }
}

/// Load `path`, or fall back to the built-in market table when the file does not exist.
///
/// Runs before logging is set up, so the source is returned for the caller to log.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<(Config, ConfigSource)> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok((default_config(), ConfigSource::BuiltIn));
    }

    let config = load_config(path)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| MarketClockError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.tick_interval_ms == 0 {
        return Err(MarketClockError::ConfigError("tick_interval_ms must be > 0".to_string()));
    }

    if config.markets.is_empty() {
        return Err(MarketClockError::ConfigError("No markets configured".to_string()));
    }

    Ok(())
}

/// Validate every market entry once, at startup.
///
/// A bad entry is reported and dropped; the remaining markets keep their order.
/// Fails when no valid market is left, or on any error that is not about one entry.
pub fn build_calendars(config: &Config) -> Result<Vec<TradingCalendar>> {
    let mut calendars: Vec<TradingCalendar> = Vec::with_capacity(config.markets.len());

    for entry in &config.markets {
        match admit_market(&entry.name, TradingCalendar::from_config(entry)) {
            Ok(Some(calendar)) => {
                if calendars.iter().any(|c| c.name == calendar.name) {
                    warn!("Duplicate market name: {}", calendar.name);
                }
                calendars.push(calendar);
            }
            Ok(None) => {}
            Err(e) => return Err(e),
        }
    }

    if calendars.is_empty() {
        return Err(MarketClockError::ConfigError("No valid markets in configuration".to_string()));
    }

    info!("Loaded {} of {} markets", calendars.len(), config.markets.len());
    Ok(calendars)
}

/// Calendar errors drop the entry; anything else aborts the load
fn admit_market(name: &str, built: Result<TradingCalendar>) -> Result<Option<TradingCalendar>> {
    match built {
        Ok(calendar) => Ok(Some(calendar)),
        Err(e) if e.is_calendar_error() => {
            error!("Skipping market '{}': {} ({})", name, e, e.error_code());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
