//! Source freshness alert layout.

use alert_core::{format_elapsed, prettify_set, AlertStatus, IndexSet, SourceFreshnessAlert};
use tracing::debug;

use crate::block::{CompactedField, ComposedMessage};
use crate::builder::MessageBuilder;

/// Title shown in the header block.
pub const HEADER_LABEL: &str = "dbt source freshness alert";

/// Title of the run result section.
pub const RUN_LABEL: &str = "Run";

/// Title of the configuration panel.
pub const CONFIGURATION_LABEL: &str = "Configuration";

pub const ERROR_AFTER_LABEL: &str = "Error after";
pub const WARN_AFTER_LABEL: &str = "Warn after";
pub const FILTER_LABEL: &str = "Filter";
pub const PATH_LABEL: &str = "Path";

/// First line of the run message when the check could not be evaluated.
pub const RUNTIME_ERROR_PREFIX: &str = "Failed to calculate the source freshness";

/// Rendering of an absent timing value.
pub const NONE_TEXT: &str = "None";

/// Spacers that push the overflow list past the client's "see more" cut.
pub const SPACER_COUNT: usize = 3;

const RUN_ICON: &str = ":mag:";
const CONFIGURATION_ICON: &str = ":hammer_and_wrench:";

/// Icon shown in front of the header label.
///
/// Only the `:small_red_triangle:` failure icon is the historical default;
/// the pass, warn and runtime error icons are a reconstruction.
pub fn status_icon(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Pass => ":white_check_mark:",
        AlertStatus::Warn => ":warning:",
        AlertStatus::Fail => ":small_red_triangle:",
        AlertStatus::RuntimeError => ":exclamation:",
    }
}

/// Compose the chat message for a source freshness alert.
///
/// Pure and deterministic: the same alert always yields the same blocks.
pub fn compose(alert: &SourceFreshnessAlert) -> ComposedMessage {
    let mut builder = MessageBuilder::new();

    add_summary(&mut builder, alert);
    add_run_result(&mut builder, alert);
    add_configuration(&mut builder, alert);

    let message = builder.build();
    debug!(
        alert_id = %alert.common().alert_id,
        status = %alert.status(),
        primary_blocks = message.primary.len(),
        overflow_blocks = message.overflow.len(),
        "Composed source freshness alert"
    );
    message
}

fn add_summary(builder: &mut MessageBuilder, alert: &SourceFreshnessAlert) {
    let common = alert.common();

    builder
        .primary()
        .header(format!("{} {}", status_icon(common.status), HEADER_LABEL))
        .context([
            format!("*Source:* {}     |", common.alias),
            format!("*Status:* {}     |", common.status),
            format!("*{}*", alert.detected_at_local()),
        ])
        .divider()
        .compacted_fields([
            CompactedField::new("Tags", set_or(common.tags.as_ref(), "_No tags_")),
            CompactedField::new("Owners", set_or(common.owners.as_ref(), "_No owners_")),
            CompactedField::new(
                "Subscribers",
                set_or(common.subscribers.as_ref(), "_No subscribers_"),
            ),
        ])
        .spacers(SPACER_COUNT);
}

fn add_run_result(builder: &mut MessageBuilder, alert: &SourceFreshnessAlert) {
    let mut overflow = builder.overflow();
    overflow
        .section_title(RUN_ICON, RUN_LABEL)
        .literal(format!("```{}```", alert.common().message.trim()));

    if alert.status().is_runtime_error() {
        overflow.context(["*Run message*"]).literal(format!(
            "{}\n```{}```",
            RUNTIME_ERROR_PREFIX,
            alert.error().unwrap_or_default()
        ));
    } else {
        let elapsed = alert
            .max_loaded_at_time_ago_in_s()
            .map(format_elapsed)
            .unwrap_or_else(|| NONE_TEXT.to_string());

        overflow.compacted_fields([
            CompactedField::new("Time Elapsed", elapsed),
            CompactedField::new("Last Record At", alert.max_loaded_at().unwrap_or(NONE_TEXT)),
            CompactedField::new("Sampled At", alert.snapshotted_at().unwrap_or(NONE_TEXT)),
        ]);
    }
}

fn add_configuration(builder: &mut MessageBuilder, alert: &SourceFreshnessAlert) {
    let entries: Vec<(&str, &str)> = [
        (ERROR_AFTER_LABEL, alert.freshness_error_after()),
        (WARN_AFTER_LABEL, alert.freshness_warn_after()),
        (FILTER_LABEL, alert.freshness_filter()),
        (PATH_LABEL, alert.path()),
    ]
    .into_iter()
    .filter_map(|(label, value)| non_empty(value).map(|v| (label, v)))
    .collect();

    if entries.is_empty() {
        return;
    }

    let mut overflow = builder.overflow();
    overflow.section_title(CONFIGURATION_ICON, CONFIGURATION_LABEL);
    for (label, value) in entries {
        overflow.labeled_code(label, value);
    }
}

fn set_or(values: Option<&IndexSet<String>>, placeholder: &str) -> String {
    values
        .map(prettify_set)
        .filter(|rendered| !rendered.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
