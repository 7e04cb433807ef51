use std::sync::OnceLock;

use regex::Regex;

pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;

    /// Matches an ATX heading: 1–6 `#` characters, a space, then text.
    ///
    /// Seven or more hashes do not match and the line falls through to
    /// paragraph handling, as does a marker with no trailing text.
    pub fn match_line(line: &str) -> Option<(u8, &str)> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN
            .get_or_init(|| Regex::new(r"^(#{1,6})\s(.+)$").expect("invalid heading regex"));

        let captures = pattern.captures(line)?;
        let level = captures.get(1)?.as_str().len() as u8;
        Some((level, captures.get(2)?.as_str()))
    }
}
