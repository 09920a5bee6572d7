//! Block Kit output for rendered freshness alerts.

use alert_core::{
    AlertStatus, CommonAlertFields, FreshnessResult, RenderConfig, SourceFreshnessAlert,
};
use chrono::{TimeZone, Utc};
use freshness_composer::{Block, CompactedField, ComposedMessage};
use serde_json::json;
use slack_schema::{render, SlackBlock, SlackFormat, SlackMessage, TextObject};

fn alert(status: AlertStatus, result: FreshnessResult) -> SourceFreshnessAlert {
    let detected_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let common = CommonAlertFields::new("alert-7", "raw.payments", status, detected_at)
        .with_message("freshness check")
        .with_owners(["@finance"]);
    SourceFreshnessAlert::new(common, result).unwrap()
}

#[test]
fn test_block_mapping() {
    let composed = ComposedMessage {
        primary: vec![Block::Header(":warning: title".into()), Block::Spacer],
        overflow: vec![Block::CompactedFields(vec![
            CompactedField::new("Tags", "_No tags_"),
            CompactedField::new("Owners", "@a"),
        ])],
    };

    let value = serde_json::to_value(SlackMessage::from(&composed)).unwrap();
    assert_eq!(
        value,
        json!({
            "text": ":warning: title",
            "blocks": [
                {
                    "type": "header",
                    "text": {"type": "plain_text", "text": ":warning: title", "emoji": true},
                },
                {"type": "section", "text": {"type": "mrkdwn", "text": "\t"}},
            ],
            "attachments": [{
                "blocks": [{
                    "type": "section",
                    "fields": [
                        {"type": "mrkdwn", "text": "*Tags*\n_No tags_"},
                        {"type": "mrkdwn", "text": "*Owners*\n@a"},
                    ],
                }],
            }],
        })
    );
}

#[test]
fn test_empty_overflow_has_no_attachment() {
    let composed = ComposedMessage {
        primary: vec![Block::Divider],
        overflow: Vec::new(),
    };
    let message = SlackMessage::from(&composed);
    assert!(message.attachments.is_empty());
    assert!(message.text.is_none());
}

#[test]
fn test_render_runtime_error_alert() {
    let alert = alert(
        AlertStatus::RuntimeError,
        FreshnessResult {
            error: Some("Connection timeout".to_string()),
            path: Some("models/sources.yml".to_string()),
            ..Default::default()
        },
    );

    let message = render(&alert, SlackFormat::Blocks).unwrap();

    assert_eq!(
        message.text.as_deref(),
        Some(":exclamation: dbt source freshness alert")
    );
    assert_eq!(message.blocks.len(), 7);
    assert_eq!(message.attachments.len(), 1);

    let overflow = &message.attachments[0].blocks;
    assert!(overflow.contains(&SlackBlock::section(
        "Failed to calculate the source freshness\n```Connection timeout```"
    )));
    assert_eq!(
        &overflow[overflow.len() - 2..],
        &[
            SlackBlock::Context {
                elements: vec![TextObject::mrkdwn("*Path*")],
            },
            SlackBlock::section("`models/sources.yml`"),
        ]
    );
}

#[test]
fn test_render_context_line() {
    let alert = alert(AlertStatus::Fail, FreshnessResult::default());
    let message = render(&alert, SlackFormat::Blocks).unwrap();

    assert_eq!(
        message.blocks[1],
        SlackBlock::Context {
            elements: vec![
                TextObject::mrkdwn("*Source:* raw.payments     |"),
                TextObject::mrkdwn("*Status:* fail     |"),
                TextObject::mrkdwn("*2024-01-02 03:04:05*"),
            ],
        }
    );
}

#[test]
fn test_render_applies_configured_timezone() {
    let config = RenderConfig::default().with_timezone("Asia/Tokyo");
    let detected_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let common = CommonAlertFields::new("alert-8", "raw.payments", AlertStatus::Fail, detected_at)
        .with_config(&config);
    let alert = SourceFreshnessAlert::new(common, FreshnessResult::default()).unwrap();

    let message = render(&alert, SlackFormat::from(&config)).unwrap();

    assert_eq!(
        message.blocks[1],
        SlackBlock::Context {
            elements: vec![
                TextObject::mrkdwn("*Source:* raw.payments     |"),
                TextObject::mrkdwn("*Status:* fail     |"),
                TextObject::mrkdwn("*2024-01-02 12:04:05*"),
            ],
        }
    );
}

#[test]
fn test_format_from_config() {
    assert_eq!(SlackFormat::from(&RenderConfig::default()), SlackFormat::Blocks);
    assert_eq!(
        SlackFormat::from(&RenderConfig::default().with_slack_workflow(true)),
        SlackFormat::Workflow
    );
}

#[test]
fn test_render_workflow_payload() {
    let alert = alert(
        AlertStatus::Warn,
        FreshnessResult {
            unique_id: "source.pay.raw.payments".to_string(),
            max_loaded_at_time_ago_in_s: Some(90.0),
            ..Default::default()
        },
    );
    let config = RenderConfig::default().with_slack_workflow(true);

    let message = render(&alert, SlackFormat::from(&config)).unwrap();
    assert!(message.blocks.is_empty());

    let payload: serde_json::Value =
        serde_json::from_str(message.text.as_deref().unwrap()).unwrap();
    assert_eq!(payload["alias"], "raw.payments");
    assert_eq!(payload["status"], "warn");
    assert_eq!(payload["unique_id"], "source.pay.raw.payments");
    assert_eq!(payload["max_loaded_at_time_ago_in_s"], 90.0);
}

#[test]
fn test_json_round_trip_of_rendered_message() {
    let alert = alert(AlertStatus::Pass, FreshnessResult::default());
    let message = render(&alert, SlackFormat::Blocks).unwrap();

    let parsed: SlackMessage = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    assert_eq!(parsed, message);
}
