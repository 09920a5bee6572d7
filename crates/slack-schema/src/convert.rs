//! Conversion from composed blocks to Block Kit.

use alert_core::{RenderConfig, SourceFreshnessAlert};
use freshness_composer::{compose, Block, ComposedMessage};
use tracing::debug;

use crate::error::SlackError;
use crate::types::{SlackAttachment, SlackBlock, SlackMessage, TextObject, SPACER_TEXT};

impl From<&Block> for SlackBlock {
    fn from(block: &Block) -> Self {
        match block {
            Block::Header(text) => SlackBlock::Header {
                text: TextObject::plain(text.clone()),
            },
            Block::Context(elements) => SlackBlock::Context {
                elements: elements.iter().cloned().map(TextObject::mrkdwn).collect(),
            },
            Block::Divider => SlackBlock::Divider,
            Block::Literal(text) => SlackBlock::section(text.clone()),
            Block::CompactedFields(fields) => SlackBlock::Section {
                text: None,
                fields: fields
                    .iter()
                    .map(|field| TextObject::mrkdwn(format!("*{}*\n{}", field.label, field.value)))
                    .collect(),
            },
            Block::Spacer => SlackBlock::section(SPACER_TEXT),
        }
    }
}

impl From<&ComposedMessage> for SlackMessage {
    fn from(message: &ComposedMessage) -> Self {
        let blocks = message.primary.iter().map(SlackBlock::from).collect();
        let attachments = if message.overflow.is_empty() {
            Vec::new()
        } else {
            vec![SlackAttachment {
                blocks: message.overflow.iter().map(SlackBlock::from).collect(),
            }]
        };

        SlackMessage {
            text: message.header_text().map(str::to_string),
            blocks,
            attachments,
        }
    }
}

/// Shape of the Slack payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlackFormat {
    /// Block Kit layout with a "see more" attachment.
    #[default]
    Blocks,
    /// Raw alert JSON for Slack workflow webhooks.
    Workflow,
}

impl From<&RenderConfig> for SlackFormat {
    fn from(config: &RenderConfig) -> Self {
        if config.slack_workflow {
            Self::Workflow
        } else {
            Self::Blocks
        }
    }
}

/// Render a source freshness alert as a Slack message.
///
/// Timestamps are already localized in the alert; apply a configured
/// timezone with [`CommonAlertFields::with_config`](alert_core::CommonAlertFields::with_config)
/// before building it.
pub fn render(
    alert: &SourceFreshnessAlert,
    format: SlackFormat,
) -> Result<SlackMessage, SlackError> {
    match format {
        SlackFormat::Workflow => {
            debug!(alert_id = %alert.common().alert_id, "Rendering Slack workflow payload");
            SlackMessage::workflow(alert)
        }
        SlackFormat::Blocks => Ok(SlackMessage::from(&compose(alert))),
    }
}
