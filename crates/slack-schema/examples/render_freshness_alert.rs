//! Render a sample source freshness alert as Slack JSON.
//!
//! Run with: cargo run -p slack-schema --example render_freshness_alert
//!
//! Environment:
//!   ALERTS_TIMEZONE=Europe/Berlin     Display timezone
//!   ALERTS_SLACK_WORKFLOW=true        Print a workflow payload instead
//!   RUST_LOG=freshness_composer=debug Show composition logs

use alert_core::{
    AlertStatus, CommonAlertFields, FreshnessResult, RenderConfig, SourceFreshnessAlert,
};
use chrono::Utc;
use slack_schema::SlackFormat;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = RenderConfig::from_env()?;
    info!(
        timezone = ?config.timezone,
        workflow = config.slack_workflow,
        "Loaded render config"
    );

    let common =
        CommonAlertFields::new("demo-alert", "shop.raw.orders", AlertStatus::Warn, Utc::now())
            .with_message("Freshness of shop.raw.orders crossed the warn threshold")
            .with_tags(["pii", "critical"])
            .with_owners(["@data-platform"])
            .with_config(&config);

    let result = FreshnessResult {
        unique_id: "source.shop.raw.orders".to_string(),
        snapshotted_at: Some(Utc::now().to_rfc3339()),
        max_loaded_at: Some((Utc::now() - chrono::Duration::seconds(3725)).to_rfc3339()),
        max_loaded_at_time_ago_in_s: Some(3725.0),
        source_name: "raw".to_string(),
        identifier: "orders".to_string(),
        freshness_error_after: Some("{'count': 24, 'period': 'hour'}".to_string()),
        freshness_warn_after: Some("{'count': 1, 'period': 'hour'}".to_string()),
        path: Some("models/staging/sources.yml".to_string()),
        ..Default::default()
    };

    let alert = SourceFreshnessAlert::new(common, result)?;
    let message = slack_schema::render(&alert, SlackFormat::from(&config))?;

    println!("{}", message.to_json_pretty()?);
    Ok(())
}
