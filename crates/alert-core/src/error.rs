//! Error types for alert construction.

use thiserror::Error;

/// Errors that can occur while building an alert.
#[derive(Debug, Error)]
pub enum AlertError {
    /// A timestamp string could not be parsed.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// The timezone name is not a known IANA zone.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Status string outside the known set.
    #[error("unknown alert status: {0}")]
    UnknownStatus(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for alert operations.
pub type Result<T> = std::result::Result<T, AlertError>;
