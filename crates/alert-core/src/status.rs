//! Freshness check outcome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AlertError;

/// Outcome of an evaluated freshness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    /// The source is fresh.
    #[serde(rename = "pass")]
    Pass,
    /// The source crossed the warn threshold.
    #[serde(rename = "warn")]
    Warn,
    /// The source crossed the error threshold.
    #[serde(rename = "fail")]
    Fail,
    /// The check itself could not be evaluated.
    #[serde(rename = "runtime error", alias = "runtime_error", alias = "error")]
    RuntimeError,
}

impl AlertStatus {
    /// Get the display name used in rendered messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::RuntimeError => "runtime error",
        }
    }

    /// Whether the check failed to run rather than produce a result.
    pub fn is_runtime_error(&self) -> bool {
        matches!(self, Self::RuntimeError)
    }

    /// Parse a status, treating anything unrecognised as a runtime error.
    ///
    /// Use this when rendering must go ahead even for malformed upstream
    /// rows; the alert then shows the error icon and error section.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: AlertError| {
            warn!(status = %value, error = %err, "Falling back to runtime error status");
            Self::RuntimeError
        })
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertStatus {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" => Ok(Self::Pass),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            "error" | "runtime error" | "runtime_error" => Ok(Self::RuntimeError),
            _ => Err(AlertError::UnknownStatus(s.to_string())),
        }
    }
}
