use std::sync::OnceLock;

use regex::Regex;

/// List-item line patterns: checklist, unordered bullet, ordered.
///
/// Checklist form is checked before the plain bullet form because every
/// checklist line also matches the bullet pattern.
pub struct ListItem;

impl ListItem {
    /// `- [ ] text` or `- [x] text`, with `-` or `*` as the bullet.
    ///
    /// Only a lowercase `x` marks the item checked; `[X]` falls through to
    /// the plain bullet pattern.
    pub fn checklist(line: &str) -> Option<(&str, bool)> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^[-*]\s\[([ x])\]\s(.+)$").expect("invalid checklist regex")
        });

        let captures = pattern.captures(line)?;
        let checked = captures.get(1)?.as_str() == "x";
        Some((captures.get(2)?.as_str(), checked))
    }

    /// `- text` or `* text` (not in checklist form).
    pub fn bullet(line: &str) -> Option<&str> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(r"^[-*]\s(.+)$").expect("invalid bullet regex"));

        Some(pattern.captures(line)?.get(1)?.as_str())
    }

    /// `1. text`, `42. text`, ...
    pub fn ordered(line: &str) -> Option<&str> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(r"^\d+\.\s(.+)$").expect("invalid ordered regex"));

        Some(pattern.captures(line)?.get(1)?.as_str())
    }
}
