/// Centralized error types for the market clock
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketClockError {
    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid session for {market}: {reason}")]
    InvalidSession { market: String, reason: String },

    #[error("Invalid lunch break for {market}: {reason}")]
    InvalidLunchBreak { market: String, reason: String },

    #[error("Invalid holiday date for {market}: {value}")]
    InvalidHoliday { market: String, value: String },

    #[error("Unknown timezone for {market}: {timezone}")]
    UnknownTimezone { market: String, timezone: String },

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarketClockError>;

impl MarketClockError {
    /// Errors raised while validating a single market entry
    pub fn is_calendar_error(&self) -> bool {
        matches!(
            self,
            MarketClockError::InvalidTime(_)
                | MarketClockError::InvalidSession { .. }
                | MarketClockError::InvalidLunchBreak { .. }
                | MarketClockError::InvalidHoliday { .. }
                | MarketClockError::UnknownTimezone { .. }
        )
    }

    /// Check if error should stop the application
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MarketClockError::ConfigError(_)
                | MarketClockError::FileError(_)
        )
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &str {
        match self {
            MarketClockError::ConfigError(_) => "CFG_001",
            MarketClockError::InvalidTime(_) => "CFG_002",
            MarketClockError::InvalidSession { .. } => "CAL_001",
            MarketClockError::InvalidLunchBreak { .. } => "CAL_002",
            MarketClockError::InvalidHoliday { .. } => "CAL_003",
            MarketClockError::UnknownTimezone { .. } => "CAL_004",
            MarketClockError::FileError(_) => "FILE_001",
        }
    }
}
