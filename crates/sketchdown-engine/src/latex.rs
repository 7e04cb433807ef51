//! LaTeX-to-readable-text conversion for displaying recognized math.

use std::sync::OnceLock;

use regex::Regex;

/// Converts a LaTeX snippet into plain display text.
///
/// `\sqrt{...}` becomes `√(...)`, `^2` becomes a superscript two, `\text{...}`
/// wrappers are removed, and whitespace runs collapse to single spaces.
pub fn latex_to_text(latex: &str) -> String {
    static SQRT: OnceLock<Regex> = OnceLock::new();
    static TEXT: OnceLock<Regex> = OnceLock::new();
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();

    let sqrt = SQRT.get_or_init(|| Regex::new(r"\\sqrt\{([^}]+)\}").expect("invalid sqrt regex"));
    let text = TEXT.get_or_init(|| Regex::new(r"\\text\{([^}]+)\}").expect("invalid text regex"));
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

    let result = sqrt.replace_all(latex, "√($1)");
    let result = result.replace("^2", "²");
    let result = text.replace_all(&result, "$1");
    let result = whitespace.replace_all(&result, " ");
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_becomes_radical() {
        assert_eq!(latex_to_text(r"\sqrt{a + b}"), "√(a + b)");
    }

    #[test]
    fn squared_becomes_superscript() {
        assert_eq!(latex_to_text("x^2 + y^2"), "x² + y²");
    }

    #[test]
    fn text_wrapper_removed() {
        assert_eq!(latex_to_text(r"\text{area} = x^2"), "area = x²");
    }

    #[test]
    fn whitespace_collapsed_and_trimmed() {
        assert_eq!(latex_to_text("  a   =\n  b "), "a = b");
    }

    #[test]
    fn combined_expression() {
        assert_eq!(
            latex_to_text(r"h = \sqrt{3^2 + 4^2} \text{cm}"),
            "h = √(3² + 4²) cm"
        );
    }
}
