//! Line helpers shared by the extractor passes.

use std::sync::LazyLock;

use regex::Regex;

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static RE_ANY_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•●▪‣–]+\s*").unwrap());

/// Converts CRLF and lone CR line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Trimmed, non-empty lines of `text` after newline normalisation.
pub fn non_empty_lines(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Replaces runs of two or more whitespace characters with one space.
pub fn collapse_spaces(s: &str) -> String {
    RE_MULTI_SPACE.replace_all(s, " ").trim().to_string()
}

/// Collapses all whitespace (including single tabs/newlines) to single spaces.
pub fn clean(s: &str) -> String {
    RE_ANY_SPACE.replace_all(s, " ").trim().to_string()
}

/// Removes a leading bullet glyph run and the whitespace after it.
pub fn strip_bullet(s: &str) -> String {
    RE_LEADING_BULLET.replace(s.trim(), "").trim().to_string()
}

/// Number of whitespace-separated tokens.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines_crlf_and_cr() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_non_empty_lines_trims_and_filters() {
        let lines = non_empty_lines("  Jane Doe \r\n\r\n   \n Engineer");
        assert_eq!(lines, vec!["Jane Doe", "Engineer"]);
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("Jane    Doe"), "Jane Doe");
        assert_eq!(collapse_spaces("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_strip_bullet_variants() {
        assert_eq!(strip_bullet("• Shipped v2"), "Shipped v2");
        assert_eq!(strip_bullet("-- Shipped"), "Shipped");
        assert_eq!(strip_bullet("– Shipped"), "Shipped");
        assert_eq!(strip_bullet("Shipped"), "Shipped");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  a  b\tc "), 3);
        assert_eq!(word_count(""), 0);
    }
}
