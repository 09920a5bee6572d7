//! Rendering configuration.

use std::env;

use crate::error::{AlertError, Result};
use crate::time::resolve_timezone;

/// Options that control how alerts are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// IANA timezone for displayed timestamps. `None` means UTC.
    pub timezone: Option<String>,

    /// Send the raw alert as JSON for Slack workflows instead of blocks.
    pub slack_workflow: bool,
}

impl RenderConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ALERTS_TIMEZONE` - Display timezone (default: UTC)
    /// - `ALERTS_SLACK_WORKFLOW` - Emit workflow payloads (default: false)
    pub fn from_env() -> Result<Self> {
        let timezone = env::var("ALERTS_TIMEZONE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(tz) = &timezone {
            resolve_timezone(Some(tz.as_str())).map_err(|_| {
                AlertError::Config(format!("ALERTS_TIMEZONE is not a known timezone: {}", tz))
            })?;
        }

        let slack_workflow = env::var("ALERTS_SLACK_WORKFLOW")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            timezone,
            slack_workflow,
        })
    }

    /// Set the display timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Enable or disable Slack workflow payloads.
    pub fn with_slack_workflow(mut self, enabled: bool) -> Self {
        self.slack_workflow = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RenderConfig::default();
        assert!(config.timezone.is_none());
        assert!(!config.slack_workflow);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::default()
            .with_timezone("Europe/Paris")
            .with_slack_workflow(true);
        assert_eq!(config.timezone.as_deref(), Some("Europe/Paris"));
        assert!(config.slack_workflow);
    }
}
