//! Error types for the luna_core library.

use chrono::NaiveDate;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for luna_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Prediction requested before any cycle has been recorded
    #[error("no period data available")]
    NoCycleData,

    /// A date string that does not match the dd-mm-yyyy boundary format
    #[error("invalid date {input:?} (expected dd-mm-yyyy): {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A cycle whose end date precedes its start date
    #[error(
        "cycle end date {} precedes start date {}",
        .end.format(crate::date::DATE_FORMAT),
        .start.format(crate::date::DATE_FORMAT)
    )]
    InvalidCycleRange { start: NaiveDate, end: NaiveDate },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
