//! Slack Block Kit schema for freshness alerts.
//!
//! This crate wraps a [`ComposedMessage`] into the JSON shape accepted by
//! Slack's `chat.postMessage` and incoming webhooks:
//!
//! - `primary` blocks go into the top-level `blocks` array
//! - `overflow` blocks go into a single attachment, which Slack folds
//!   behind "see more"
//!
//! Delivery is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertStatus, CommonAlertFields, FreshnessResult, SourceFreshnessAlert};
//! use chrono::Utc;
//! use slack_schema::SlackFormat;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let common = CommonAlertFields::new("alert-1", "raw.orders", AlertStatus::Fail, Utc::now());
//! let alert = SourceFreshnessAlert::new(common, FreshnessResult::default())?;
//!
//! let message = slack_schema::render(&alert, SlackFormat::Blocks)?;
//! println!("{}", message.to_json()?);
//! # Ok(())
//! # }
//! ```

mod convert;
mod error;
mod types;

pub use convert::{render, SlackFormat};
pub use error::SlackError;
pub use types::{SlackAttachment, SlackBlock, SlackMessage, TextObject, SPACER_TEXT};

// Re-export the composer output type
pub use freshness_composer::ComposedMessage;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
