use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding state. The builder decides what the
/// classification means given its open runs — in particular, while a code
/// fence is open every non-delimiter line is consumed via `text`, whatever
/// its `kind` says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line with surrounding whitespace removed.
    pub text: String,
    pub kind: LineKind,
}

/// What a line looks like in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// A fence delimiter line; `language` is the trimmed text after ```` ``` ````.
    Fence { language: String },
    /// A blockquote line; `rest` is the text after `>`, trimmed.
    Quote { rest: String },
    Heading { level: u8, text: String },
    Checklist { text: String, checked: bool },
    Bullet { text: String },
    Ordered { text: String },
    Break,
    /// Anything else: paragraph text.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a raw input line into a [`LineClass`].
    ///
    /// Checks follow the scanner's fixed precedence: fence delimiter, quote,
    /// heading, checklist, bullet, ordered item, thematic break, then plain
    /// text. Checklist must precede bullet since its lines also match the
    /// bullet pattern.
    pub fn classify(&self, raw: &str) -> LineClass {
        let text = raw.trim().to_string();

        let kind = if text.is_empty() {
            LineKind::Blank
        } else if let Some(language) = CodeFence::delimiter(&text) {
            LineKind::Fence {
                language: language.to_string(),
            }
        } else if let Some(rest) = BlockQuote::strip_prefix(&text) {
            LineKind::Quote {
                rest: rest.to_string(),
            }
        } else if let Some((level, heading)) = Heading::match_line(&text) {
            LineKind::Heading {
                level,
                text: heading.to_string(),
            }
        } else if let Some((item, checked)) = ListItem::checklist(&text) {
            LineKind::Checklist {
                text: item.to_string(),
                checked,
            }
        } else if let Some(item) = ListItem::bullet(&text) {
            LineKind::Bullet {
                text: item.to_string(),
            }
        } else if let Some(item) = ListItem::ordered(&text) {
            LineKind::Ordered {
                text: item.to_string(),
            }
        } else if ThematicBreak::is_break(&text) {
            LineKind::Break
        } else {
            LineKind::Text
        };

        LineClass { text, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(line: &str) -> LineKind {
        LineClassifier.classify(line).kind
    }

    #[test]
    fn classify_blank_and_whitespace() {
        assert_eq!(kind_of(""), LineKind::Blank);
        assert_eq!(kind_of("   \t"), LineKind::Blank);
    }

    #[test]
    fn classify_fence_with_language() {
        assert_eq!(
            kind_of("```rust"),
            LineKind::Fence {
                language: "rust".to_string()
            }
        );
    }

    #[test]
    fn classify_quote() {
        assert_eq!(
            kind_of("> quoted"),
            LineKind::Quote {
                rest: "quoted".to_string()
            }
        );
    }

    #[test]
    fn checklist_wins_over_bullet() {
        assert_eq!(
            kind_of("- [ ] task"),
            LineKind::Checklist {
                text: "task".to_string(),
                checked: false
            }
        );
    }

    #[test]
    fn dashes_are_a_break_not_a_bullet() {
        assert_eq!(kind_of("---"), LineKind::Break);
    }

    #[test]
    fn leading_whitespace_is_trimmed_before_matching() {
        assert_eq!(
            kind_of("   # Indented"),
            LineKind::Heading {
                level: 1,
                text: "Indented".to_string()
            }
        );
    }

    #[test]
    fn plain_text_falls_through() {
        assert_eq!(kind_of("just words"), LineKind::Text);
    }
}
