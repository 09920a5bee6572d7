//! Error types for slack-schema.

use thiserror::Error;

/// Errors that can occur when building Slack payloads.
#[derive(Debug, Error)]
pub enum SlackError {
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
