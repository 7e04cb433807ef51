use std::sync::OnceLock;

use regex::Regex;

pub struct ThematicBreak;

impl ThematicBreak {
    /// Canonical text emitted for every rule, whatever characters formed it.
    pub const TEXT: &'static str = "---";

    /// Three or more of `-`, `*`, or `_` with nothing else on the line.
    /// The characters may be mixed, matching the source grammar's class.
    pub fn is_break(line: &str) -> bool {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(r"^[-*_]{3,}$").expect("invalid break regex"));
        pattern.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_asterisks_underscores() {
        assert!(ThematicBreak::is_break("---"));
        assert!(ThematicBreak::is_break("*****"));
        assert!(ThematicBreak::is_break("___"));
    }

    #[test]
    fn mixed_characters_match() {
        assert!(ThematicBreak::is_break("-*_"));
    }

    #[test]
    fn too_short() {
        assert!(!ThematicBreak::is_break("--"));
    }

    #[test]
    fn trailing_text_does_not_match() {
        assert!(!ThematicBreak::is_break("--- text"));
    }
}
