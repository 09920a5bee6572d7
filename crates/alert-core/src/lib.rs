//! Alert data model and rendering helpers for data freshness notifications.
//!
//! This crate holds everything a chat renderer needs to know about an
//! evaluated freshness check, without deciding how it is laid out:
//!
//! - [`CommonAlertFields`] - Metadata shared by every alert kind
//! - [`SourceFreshnessAlert`] - One evaluated source freshness check
//! - [`AlertStatus`] - The closed set of check outcomes
//! - [`time`] - Timestamp localization and elapsed-time formatting
//! - [`prettify`] - Deterministic set-to-string rendering
//! - [`RenderConfig`] - Environment-driven rendering options
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertStatus, CommonAlertFields, FreshnessResult, SourceFreshnessAlert};
//! use chrono::{TimeZone, Utc};
//!
//! # fn example() -> Result<(), alert_core::AlertError> {
//! let detected_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//! let common = CommonAlertFields::new("alert-1", "raw.orders", AlertStatus::Warn, detected_at)
//!     .with_timezone("Europe/Berlin")
//!     .with_tags(["pii", "critical"]);
//!
//! let result = FreshnessResult {
//!     unique_id: "source.shop.raw.orders".to_string(),
//!     max_loaded_at: Some("2024-03-01T10:00:00Z".to_string()),
//!     ..Default::default()
//! };
//!
//! let alert = SourceFreshnessAlert::new(common, result)?;
//! assert_eq!(alert.max_loaded_at(), Some("2024-03-01 11:00:00"));
//! # Ok(())
//! # }
//! ```

mod alert;
mod config;
mod error;
mod status;

pub mod prettify;
pub mod time;

pub use alert::{CommonAlertFields, FreshnessResult, SourceFreshnessAlert};
pub use config::RenderConfig;
pub use error::{AlertError, Result};
pub use prettify::prettify_set;
pub use status::AlertStatus;
pub use time::{format_elapsed, localize, localize_datetime, DATETIME_FORMAT};

// Re-export the set type used for tags, owners and subscribers
pub use indexmap::IndexSet;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
