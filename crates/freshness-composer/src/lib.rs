//! Chat message composition for source freshness alerts.
//!
//! [`compose`] turns one [`SourceFreshnessAlert`] into a [`ComposedMessage`]:
//! an ordered `primary` list that is always visible, and an `overflow` list
//! that chat clients fold behind "see more".
//!
//! # Layout
//!
//! ```text
//! primary                           overflow
//! ┌──────────────────────────────┐  ┌──────────────────────────────┐
//! │ Header  {icon} dbt source ...│  │ :mag: *Run*  + divider       │
//! │ Context source | status | at │  │ ```message```                │
//! │ Divider                      │  │ run error  OR  timing fields │
//! │ Tags | Owners | Subscribers  │  │ [Configuration panel]        │
//! │ Spacer x3                    │  └──────────────────────────────┘
//! └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertStatus, CommonAlertFields, FreshnessResult, SourceFreshnessAlert};
//! use chrono::Utc;
//! use freshness_composer::{compose, Block};
//!
//! # fn example() -> Result<(), alert_core::AlertError> {
//! let common = CommonAlertFields::new("alert-1", "raw.orders", AlertStatus::Pass, Utc::now());
//! let alert = SourceFreshnessAlert::new(common, FreshnessResult::default())?;
//!
//! let message = compose(&alert);
//! assert!(matches!(message.primary[0], Block::Header(_)));
//! # Ok(())
//! # }
//! ```

mod block;
mod builder;
mod compose;

pub use block::{Block, CompactedField, ComposedMessage};
pub use builder::{MessageBuilder, SectionBuilder};
pub use compose::{
    compose, status_icon, CONFIGURATION_LABEL, ERROR_AFTER_LABEL, FILTER_LABEL, HEADER_LABEL,
    NONE_TEXT, PATH_LABEL, RUNTIME_ERROR_PREFIX, RUN_LABEL, SPACER_COUNT, WARN_AFTER_LABEL,
};

// Re-export the input types
pub use alert_core::{AlertStatus, SourceFreshnessAlert};
