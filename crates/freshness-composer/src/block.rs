//! Platform-neutral message blocks.

use serde::Serialize;

/// A label/value pair displayed side by side with its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactedField {
    pub label: String,
    pub value: String,
}

impl CompactedField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One presentational unit of a chat message.
///
/// Text is Slack-flavoured markdown (`*bold*`, `_italic_`, backticks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Large title line.
    Header(String),
    /// Small, muted line made of several elements.
    Context(Vec<String>),
    /// Horizontal rule.
    Divider,
    /// Full-width text.
    Literal(String),
    /// Short label/value pairs shown in columns.
    CompactedFields(Vec<CompactedField>),
    /// Empty padding block.
    Spacer,
}

impl Block {
    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer)
    }
}

/// A composed message: always-visible blocks and the "see more" remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComposedMessage {
    /// Shown without expanding.
    pub primary: Vec<Block>,
    /// Shown after "see more".
    pub overflow: Vec<Block>,
}

impl ComposedMessage {
    /// Text of the header block, if any.
    pub fn header_text(&self) -> Option<&str> {
        self.primary.iter().find_map(|block| match block {
            Block::Header(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Total number of blocks across both lists.
    pub fn len(&self) -> usize {
        self.primary.len() + self.overflow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.overflow.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_composed_message_json_shape() {
        let message = ComposedMessage {
            primary: vec![
                Block::Header(":warning: title".into()),
                Block::Context(vec!["*Source:* raw.orders".into()]),
                Block::Divider,
                Block::Spacer,
            ],
            overflow: vec![
                Block::Literal("```done```".into()),
                Block::CompactedFields(vec![CompactedField::new("Tags", "pii")]),
            ],
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "primary": [
                    {"kind": "header", "content": ":warning: title"},
                    {"kind": "context", "content": ["*Source:* raw.orders"]},
                    {"kind": "divider"},
                    {"kind": "spacer"},
                ],
                "overflow": [
                    {"kind": "literal", "content": "```done```"},
                    {"kind": "compacted_fields", "content": [{"label": "Tags", "value": "pii"}]},
                ],
            })
        );
    }

    #[test]
    fn test_header_text_and_len() {
        let message = ComposedMessage {
            primary: vec![Block::Divider, Block::Header("h".into())],
            overflow: vec![Block::Spacer],
        };
        assert_eq!(message.header_text(), Some("h"));
        assert_eq!(message.len(), 3);
        assert!(!message.is_empty());
        assert!(ComposedMessage::default().is_empty());
    }
}
