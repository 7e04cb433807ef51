use serde::{Deserialize, Serialize};

/// One structural unit of the simplified document model.
///
/// Serializes to the editor's native shape: the variant name becomes the
/// `type` field and the variant's fields nest under `data`, e.g.
/// `{"type": "header", "data": {"text": "Title", "level": 1}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    Header {
        text: String,
        /// Count of leading `#` characters (1..=6).
        level: u8,
    },
    Paragraph {
        text: String,
        #[serde(default, skip_serializing_if = "ParagraphStyle::is_normal")]
        style: ParagraphStyle,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
    Code {
        code: String,
        /// Language tag from the opening fence, empty if none was given.
        language: String,
    },
}

impl Block {
    /// A plain paragraph with no special style.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::Normal,
        }
    }

    pub fn header(text: impl Into<String>, level: u8) -> Self {
        Block::Header {
            text: text.into(),
            level,
        }
    }
}

/// Presentation style of a paragraph block.
///
/// The editor only distinguishes blockquotes and horizontal rules; everything
/// else is `Normal`, which is omitted from serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParagraphStyle {
    #[default]
    Normal,
    Blockquote,
    HorizontalRule,
}

impl ParagraphStyle {
    pub fn is_normal(&self) -> bool {
        matches!(self, ParagraphStyle::Normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Unordered,
    Ordered,
}

/// A single checklist entry: the item text and whether it was marked `[x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}
