pub struct CodeFence;

impl CodeFence {
    pub const DELIMITER: &'static str = "```";

    /// Returns the language tag if the (trimmed) line is a fence delimiter.
    ///
    /// Any line starting with three backticks toggles a fence; the text after
    /// the delimiter, trimmed, is the language tag (empty on closing lines).
    pub fn delimiter(line: &str) -> Option<&str> {
        line.strip_prefix(Self::DELIMITER).map(str::trim)
    }

    /// Matches an input that is nothing but a single fenced code block.
    ///
    /// `trimmed` must span from an opening fence on the first line to a
    /// closing fence alone on the last line. Returns the trimmed language tag
    /// and the interior trimmed of surrounding blank space. Single-line
    /// inputs never match; a lone ``` ``` `` is left to the scanner.
    pub fn whole_input(trimmed: &str) -> Option<(&str, String)> {
        let rest = trimmed.strip_prefix(Self::DELIMITER)?;
        let newline = rest.find('\n')?;
        let language = rest[..newline].trim();

        let body = &rest[newline + 1..];
        let last_line_start = body.rfind('\n').map(|i| i + 1).unwrap_or(0);
        if body[last_line_start..].trim() != Self::DELIMITER {
            return None;
        }

        Some((language, body[..last_line_start].trim().to_string()))
    }
}
