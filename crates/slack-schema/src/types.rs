//! Block Kit wire types.

use serde::{Deserialize, Serialize};

use crate::error::SlackError;

/// Text of an empty padding section. Slack rejects blank section text.
pub const SPACER_TEXT: &str = "\t";

/// A Block Kit text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Unformatted text, used by header blocks.
    PlainText {
        text: String,
        /// Render `:emoji:` shortcodes.
        #[serde(skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    /// Slack-flavoured markdown.
    Mrkdwn { text: String },
}

impl TextObject {
    /// Plain text with emoji shortcodes enabled.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text, .. } | Self::Mrkdwn { text } => text,
        }
    }
}

/// A Block Kit layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackBlock {
    Header {
        text: TextObject,
    },
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<TextObject>,
    },
    Context {
        elements: Vec<TextObject>,
    },
    Divider,
}

impl SlackBlock {
    /// Section with a single markdown text.
    pub fn section(text: impl Into<String>) -> Self {
        Self::Section {
            text: Some(TextObject::mrkdwn(text)),
            fields: Vec::new(),
        }
    }
}

/// A legacy attachment carrying its own blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackAttachment {
    pub blocks: Vec<SlackBlock>,
}

/// A complete Slack message payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    /// Notification fallback text (or the raw payload in workflow mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<SlackBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<SlackAttachment>,
}

impl SlackMessage {
    /// Workflow payload: the alert serialized as JSON text, no blocks.
    ///
    /// Slack workflow webhooks take flat variables instead of layout.
    pub fn workflow<T: Serialize>(alert: &T) -> Result<Self, SlackError> {
        Ok(Self {
            text: Some(serde_json::to_string(alert)?),
            ..Default::default()
        })
    }

    pub fn to_json(&self) -> Result<String, SlackError> {
        serde_json::to_string(self).map_err(SlackError::from)
    }

    pub fn to_json_pretty(&self) -> Result<String, SlackError> {
        serde_json::to_string_pretty(self).map_err(SlackError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_wire_shapes() {
        let blocks = vec![
            SlackBlock::Header {
                text: TextObject::plain("Title"),
            },
            SlackBlock::Divider,
            SlackBlock::Context {
                elements: vec![TextObject::mrkdwn("*a*")],
            },
            SlackBlock::section("body"),
        ];

        assert_eq!(
            serde_json::to_value(&blocks).unwrap(),
            json!([
                {"type": "header", "text": {"type": "plain_text", "text": "Title", "emoji": true}},
                {"type": "divider"},
                {"type": "context", "elements": [{"type": "mrkdwn", "text": "*a*"}]},
                {"type": "section", "text": {"type": "mrkdwn", "text": "body"}},
            ])
        );
    }

    #[test]
    fn test_message_omits_empty_parts() {
        let message = SlackMessage::default();
        assert_eq!(message.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_parse_block_kit_json() {
        let raw = r#"{"blocks":[{"type":"section","fields":[{"type":"mrkdwn","text":"x"}]}]}"#;
        let message: SlackMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(
            message.blocks,
            vec![SlackBlock::Section {
                text: None,
                fields: vec![TextObject::mrkdwn("x")],
            }]
        );
    }

    #[test]
    fn test_workflow_payload() {
        let message = SlackMessage::workflow(&json!({"alias": "raw.orders"})).unwrap();
        assert_eq!(message.text.as_deref(), Some(r#"{"alias":"raw.orders"}"#));
        assert!(message.blocks.is_empty());
        assert!(message.attachments.is_empty());
    }
}
