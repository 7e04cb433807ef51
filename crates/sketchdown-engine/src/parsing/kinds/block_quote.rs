/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips the blockquote prefix from a (trimmed) line.
    ///
    /// Returns the remainder after `>` with surrounding whitespace removed,
    /// or `None` if the line is not a blockquote line. A bare `>` yields an
    /// empty remainder, which still continues the quote run.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quote_line() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn strip_bare_marker() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }

    #[test]
    fn strip_non_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }
}
