//! Inline markup rewriting for paragraph text.
//!
//! Rewrites run in a fixed order over the whole line: code spans first, then
//! `**bold**`, then `*italic*`, so double asterisks are consumed before the
//! single-asterisk pattern can see them. Each step is a global replacement
//! over the previous step's output; block classification is never affected.

use std::sync::OnceLock;

use regex::Regex;

/// Rewrites `` `code` ``, `**bold**`, and `*italic*` spans into inline
/// markup tags. Lines without markers pass through unchanged.
pub fn rewrite_inline(text: &str) -> String {
    static CODE: OnceLock<Regex> = OnceLock::new();
    static STRONG: OnceLock<Regex> = OnceLock::new();
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();

    let code = CODE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("invalid code-span regex"));
    let strong =
        STRONG.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("invalid strong regex"));
    let emphasis =
        EMPHASIS.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("invalid emphasis regex"));

    let rewritten = code.replace_all(text, "<code>$1</code>");
    let rewritten = strong.replace_all(&rewritten, "<strong>$1</strong>");
    let rewritten = emphasis.replace_all(&rewritten, "<em>$1</em>");
    rewritten.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(rewrite_inline("no markers here"), "no markers here");
    }

    #[test]
    fn code_span() {
        assert_eq!(rewrite_inline("use `foo()` here"), "use <code>foo()</code> here");
    }

    #[test]
    fn bold_before_italic() {
        assert_eq!(rewrite_inline("**bold**"), "<strong>bold</strong>");
        assert_eq!(rewrite_inline("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn all_three_in_order() {
        assert_eq!(
            rewrite_inline("Use `code` and **bold** and *italic*"),
            "Use <code>code</code> and <strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn multiple_spans_of_one_kind() {
        assert_eq!(
            rewrite_inline("`a` then `b`"),
            "<code>a</code> then <code>b</code>"
        );
    }

    #[test]
    fn unterminated_markers_left_alone() {
        assert_eq!(rewrite_inline("`open"), "`open");
        assert_eq!(rewrite_inline("**open"), "**open");
    }

    #[test]
    fn asterisks_inside_code_are_still_rewritten() {
        // Faithful to the sequential replacement chain: the emphasis pass
        // sees the code span's asterisks.
        assert_eq!(rewrite_inline("`*x*`"), "<code><em>x</em></code>");
    }
}
