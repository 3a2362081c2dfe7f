//! Error types for the rules crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or building rule values.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("day {day} is outside 1..={max_days}")]
    DayOutOfRange { day: u8, max_days: u8 },
}

pub type Result<T> = std::result::Result<T, RulesError>;
