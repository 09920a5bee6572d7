//! Builder that appends blocks to the primary or overflow list.

use crate::block::{Block, CompactedField, ComposedMessage};

/// Accumulates blocks for a [`ComposedMessage`].
///
/// Pick the target list with [`primary`](Self::primary) or
/// [`overflow`](Self::overflow), then chain block appends:
///
/// ```rust
/// use freshness_composer::{Block, MessageBuilder};
///
/// let mut builder = MessageBuilder::new();
/// builder.primary().header("Title").divider();
/// builder.overflow().literal("details");
///
/// let message = builder.build();
/// assert_eq!(message.primary, vec![Block::Header("Title".into()), Block::Divider]);
/// assert_eq!(message.overflow, vec![Block::Literal("details".into())]);
/// ```
#[derive(Debug, Default)]
pub struct MessageBuilder {
    primary: Vec<Block>,
    overflow: Vec<Block>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the always-visible list.
    pub fn primary(&mut self) -> SectionBuilder<'_> {
        SectionBuilder {
            blocks: &mut self.primary,
        }
    }

    /// Append to the "see more" list.
    pub fn overflow(&mut self) -> SectionBuilder<'_> {
        SectionBuilder {
            blocks: &mut self.overflow,
        }
    }

    pub fn build(self) -> ComposedMessage {
        ComposedMessage {
            primary: self.primary,
            overflow: self.overflow,
        }
    }
}

/// Appends blocks to one list of a [`MessageBuilder`].
#[derive(Debug)]
pub struct SectionBuilder<'a> {
    blocks: &'a mut Vec<Block>,
}

impl SectionBuilder<'_> {
    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Header(text.into()))
    }

    pub fn context<I, S>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::Context(elements.into_iter().map(Into::into).collect()))
    }

    pub fn divider(&mut self) -> &mut Self {
        self.push(Block::Divider)
    }

    pub fn literal(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Literal(text.into()))
    }

    pub fn compacted_fields<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = CompactedField>,
    {
        self.push(Block::CompactedFields(fields.into_iter().collect()))
    }

    /// Append `count` spacer blocks.
    pub fn spacers(&mut self, count: usize) -> &mut Self {
        self.blocks.extend(std::iter::repeat(Block::Spacer).take(count));
        self
    }

    /// Bold section title followed by a divider.
    pub fn section_title(&mut self, icon: &str, title: &str) -> &mut Self {
        self.literal(format!("{icon} *{title}*")).divider()
    }

    /// Bold label line followed by the value in inline code.
    pub fn labeled_code(&mut self, label: &str, value: &str) -> &mut Self {
        self.context([format!("*{label}*")])
            .literal(format!("`{value}`"))
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }
}
