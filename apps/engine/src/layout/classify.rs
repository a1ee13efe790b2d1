//! Line classification for the resume body.
//!
//! Each predicate is pure and the chain is tried in order; the first match
//! wins and anything unmatched is a paragraph. Order matters: a section title
//! such as `LEAD DATA ENGINEER` would also satisfy the title detector.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const SECTION_TITLE_MAX_CHARS: usize = 40;
const SECTION_TITLE_UPPER_RATIO: f32 = 0.6;
const TITLE_MAX_CHARS: usize = 90;

/// Leading glyphs that mark a bullet line.
pub const BULLET_GLYPHS: &[char] = &['-', '•', '●', '▪', '‣'];

static RE_ROLE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(Engineer|Scientist|Developer|Lead|Senior|Sr\.?|Principal|Architect|Manager|Analyst|AI/ML|ML|AI|Data)\b",
    )
    .unwrap()
});
static RE_TITLE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-–—·|]").unwrap());
static RE_TITLE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?)(\s{2,}|\s[-–—]\s)(\w.*)$").unwrap());
static RE_DATE_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(20\d{2}|19\d{2}|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\b")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    SectionTitle,
    Bullet,
    TitleWithDates,
    Paragraph,
    Blank,
}

/// Precedence-ordered classifier chain. `Paragraph` is the fallback.
const CLASSIFIERS: &[(LineKind, fn(&str) -> bool)] = &[
    (LineKind::Blank, is_blank),
    (LineKind::SectionTitle, is_section_title),
    (LineKind::Bullet, is_bullet),
    (LineKind::TitleWithDates, looks_like_title),
];

pub fn classify(line: &str) -> LineKind {
    CLASSIFIERS
        .iter()
        .find(|(_, matches)| matches(line))
        .map(|(kind, _)| *kind)
        .unwrap_or(LineKind::Paragraph)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Short, mostly-uppercase lines: `SUMMARY`, `CORE SKILLS`, `PROFESSIONAL EXPERIENCE`.
pub fn is_section_title(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > SECTION_TITLE_MAX_CHARS {
        return false;
    }
    let letters = trimmed.chars().filter(char::is_ascii_alphabetic).count();
    let upper = trimmed.chars().filter(char::is_ascii_uppercase).count();
    if upper == 0 || letters == 0 {
        return false;
    }
    upper as f32 / letters as f32 > SECTION_TITLE_UPPER_RATIO
}

pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_GLYPHS)
}

/// Role keywords or any company/date separator. Hyphenated prose passes too;
/// the split below then keeps the whole line as the title.
pub fn looks_like_title(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > TITLE_MAX_CHARS {
        return false;
    }
    RE_ROLE_WORDS.is_match(trimmed) || RE_TITLE_SEPARATORS.is_match(trimmed)
}

/// Removes the leading glyph run and the whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start().trim_start_matches(BULLET_GLYPHS).trim_start()
}

/// Splits `Senior Engineer | Acme    Jan 2020 - Present` into title and dates.
///
/// The right side is accepted only when it carries a year or month; otherwise
/// the whole trimmed line is the title and `dates` is empty.
pub fn split_title_and_dates(line: &str) -> (String, String) {
    if let Some(caps) = RE_TITLE_SPLIT.captures(line) {
        let left = caps.get(1).map_or("", |m| m.as_str()).trim();
        let right = caps.get(3).map_or("", |m| m.as_str()).trim();
        if RE_DATE_HINT.is_match(right) {
            return (left.to_string(), right.to_string());
        }
    }
    (line.trim().to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title_vs_prose() {
        assert_eq!(classify("CORE SKILLS"), LineKind::SectionTitle);
        assert_eq!(classify("I led the Core Skills initiative"), LineKind::Paragraph);
    }

    #[test]
    fn test_section_title_limits() {
        assert!(!is_section_title("1234"), "needs an uppercase letter");
        assert!(!is_section_title(&"A".repeat(41)), "over 40 chars");
        assert!(is_section_title("WORK EXPERIENCE:"));
    }

    #[test]
    fn test_blank_first() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_bullet_glyphs() {
        for line in ["- Built an API", "• Built", "  ● Built", "▪Built", "‣ Built"] {
            assert_eq!(classify(line), LineKind::Bullet, "{line:?} should be a bullet");
        }
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("- Built an API"), "Built an API");
        assert_eq!(strip_bullet("•• nested"), "nested");
        assert_eq!(strip_bullet("-"), "");
    }

    #[test]
    fn test_role_line_is_title() {
        assert_eq!(
            classify("Senior Engineer | Acme Corp    Jan 2020 - Present"),
            LineKind::TitleWithDates
        );
        assert_eq!(classify("Staff Software Engineer at Acme"), LineKind::TitleWithDates);
    }

    #[test]
    fn test_hyphenated_prose_classifies_as_title() {
        // Separator alone is enough; pinned so a change here is deliberate.
        assert_eq!(
            classify("Worked on cross-team projects with finance"),
            LineKind::TitleWithDates
        );
        assert_eq!(
            split_title_and_dates("Worked on cross-team projects with finance"),
            ("Worked on cross-team projects with finance".to_string(), String::new())
        );
    }

    #[test]
    fn test_split_title_and_dates() {
        let (title, dates) =
            split_title_and_dates("Senior Engineer | Acme Corp    Jan 2020 - Present");
        assert_eq!(title, "Senior Engineer | Acme Corp");
        assert_eq!(dates, "Jan 2020 - Present");
    }

    #[test]
    fn test_split_on_spaced_dash() {
        let (title, dates) = split_title_and_dates("Data Analyst - 2018 to 2020");
        assert_eq!(title, "Data Analyst");
        assert_eq!(dates, "2018 to 2020");
    }

    #[test]
    fn test_split_without_date_keeps_line() {
        let (title, dates) = split_title_and_dates("Lead Engineer    Platform Team");
        assert_eq!(title, "Lead Engineer    Platform Team");
        assert!(dates.is_empty());
    }

    #[test]
    fn test_long_line_is_paragraph() {
        let line = format!("Engineer {}", "word ".repeat(20));
        assert_eq!(classify(&line), LineKind::Paragraph);
    }
}
