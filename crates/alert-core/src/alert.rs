//! Alert records.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::status::AlertStatus;
use crate::time::{localize, localize_datetime};

/// Metadata shared by every alert kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonAlertFields {
    /// Identifier of the alert row.
    pub alert_id: String,
    /// Human-readable name of the monitored object.
    pub alias: String,
    /// Outcome of the check.
    pub status: AlertStatus,
    /// When the outcome was detected (UTC).
    pub detected_at: DateTime<Utc>,
    /// Free-text summary produced by the check.
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub tags: Option<IndexSet<String>>,
    #[serde(default)]
    pub owners: Option<IndexSet<String>>,
    #[serde(default)]
    pub subscribers: Option<IndexSet<String>>,
    /// IANA timezone used for display. `None` means UTC.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl CommonAlertFields {
    /// Create alert metadata with no message, tags, owners or subscribers.
    pub fn new(
        alert_id: impl Into<String>,
        alias: impl Into<String>,
        status: AlertStatus,
        detected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            alert_id: alert_id.into(),
            alias: alias.into(),
            status,
            detected_at,
            message: String::new(),
            tags: None,
            owners: None,
            subscribers: None,
            timezone: None,
        }
    }

    /// Set the free-text summary.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the owners.
    pub fn with_owners<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owners = Some(owners.into_iter().map(Into::into).collect());
        self
    }

    /// Set the subscribers.
    pub fn with_subscribers<I, S>(mut self, subscribers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscribers = Some(subscribers.into_iter().map(Into::into).collect());
        self
    }

    /// Set the display timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Apply rendering options that belong to the alert itself.
    ///
    /// A configured timezone replaces the current one; without one the
    /// alert keeps its own.
    pub fn with_config(mut self, config: &RenderConfig) -> Self {
        if let Some(timezone) = &config.timezone {
            self.timezone = Some(timezone.clone());
        }
        self
    }
}

/// Freshness-specific fields as read from the warehouse, timestamps in UTC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreshnessResult {
    pub unique_id: String,
    pub snapshotted_at: Option<String>,
    pub max_loaded_at: Option<String>,
    pub max_loaded_at_time_ago_in_s: Option<f64>,
    pub source_name: String,
    pub identifier: String,
    pub freshness_error_after: Option<String>,
    pub freshness_warn_after: Option<String>,
    pub freshness_filter: Option<String>,
    pub path: Option<String>,
    /// Failure detail, set only when the check could not run.
    pub error: Option<String>,
}

/// One evaluated source freshness check, ready to render.
///
/// Timestamps are localized once, in [`SourceFreshnessAlert::new`]; the
/// record is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFreshnessAlert {
    #[serde(flatten)]
    common: CommonAlertFields,
    detected_at_local: String,
    unique_id: String,
    snapshotted_at: Option<String>,
    max_loaded_at: Option<String>,
    max_loaded_at_time_ago_in_s: Option<f64>,
    source_name: String,
    identifier: String,
    freshness_error_after: Option<String>,
    freshness_warn_after: Option<String>,
    freshness_filter: Option<String>,
    path: Option<String>,
    error: Option<String>,
}

impl SourceFreshnessAlert {
    /// Build an alert, localizing every timestamp into the alert timezone.
    ///
    /// Fails with [`AlertError::InvalidTimestamp`](crate::AlertError::InvalidTimestamp)
    /// on a malformed timestamp and
    /// [`AlertError::InvalidTimezone`](crate::AlertError::InvalidTimezone)
    /// on an unknown timezone.
    pub fn new(common: CommonAlertFields, result: FreshnessResult) -> Result<Self> {
        let timezone = common.timezone.as_deref();
        let detected_at_local = localize_datetime(common.detected_at, timezone)?;
        let snapshotted_at = localize(result.snapshotted_at.as_deref(), timezone)?;
        let max_loaded_at = localize(result.max_loaded_at.as_deref(), timezone)?;

        Ok(Self {
            common,
            detected_at_local,
            unique_id: result.unique_id,
            snapshotted_at,
            max_loaded_at,
            max_loaded_at_time_ago_in_s: result.max_loaded_at_time_ago_in_s,
            source_name: result.source_name,
            identifier: result.identifier,
            freshness_error_after: result.freshness_error_after,
            freshness_warn_after: result.freshness_warn_after,
            freshness_filter: result.freshness_filter,
            path: result.path,
            error: result.error,
        })
    }

    pub fn common(&self) -> &CommonAlertFields {
        &self.common
    }

    pub fn status(&self) -> AlertStatus {
        self.common.status
    }

    /// `detected_at` formatted in the alert timezone.
    pub fn detected_at_local(&self) -> &str {
        &self.detected_at_local
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Localized sampling time.
    pub fn snapshotted_at(&self) -> Option<&str> {
        self.snapshotted_at.as_deref()
    }

    /// Localized load time of the newest record.
    pub fn max_loaded_at(&self) -> Option<&str> {
        self.max_loaded_at.as_deref()
    }

    pub fn max_loaded_at_time_ago_in_s(&self) -> Option<f64> {
        self.max_loaded_at_time_ago_in_s
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn freshness_error_after(&self) -> Option<&str> {
        self.freshness_error_after.as_deref()
    }

    pub fn freshness_warn_after(&self) -> Option<&str> {
        self.freshness_warn_after.as_deref()
    }

    pub fn freshness_filter(&self) -> Option<&str> {
        self.freshness_filter.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
