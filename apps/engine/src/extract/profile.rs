//! Profile Extractor: pulls contact fields, name, headline, location and skills
//! out of raw resume text.
//!
//! Every field is best-effort. Malformed input degrades to `None` / empty
//! collections; nothing here returns an error.
//!
//! Name and headline only look at the top of the document (8 and 10 lines).
//! Location and the skills dictionary fallback scan everything.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::skills::{detect_skills, SkillDictionary};
use crate::extract::text::{collapse_spaces, non_empty_lines, word_count};

const NAME_SCAN_LINES: usize = 8;
const HEADLINE_SCAN_LINES: usize = 10;
const NAME_MAX_WORDS: usize = 6;
const HEADLINE_MAX_WORDS: usize = 12;
const HEADLINE_MIN_CHARS: usize = 7;
const MIN_PHONE_DIGITS: usize = 9;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").unwrap());
// Horizontal whitespace only: a phone number never spans two lines.
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d \t\-().]{8,}\d").unwrap());
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)[^\s)]+").unwrap());
static RE_URLISH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:https?://|www\.)").unwrap());
static RE_NAME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z].{1,59}$").unwrap());
static RE_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[A-Z]{2}\b(?:\s+\d{5})?").unwrap());

/// Structured snapshot of a resume, derived once per input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Unique URLs in first-seen order, trailing punctuation removed.
    pub links: Vec<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub skills: Vec<String>,
}

/// Extracts a profile using the default skill dictionary.
pub fn extract_profile(text: &str) -> ExtractedProfile {
    extract_profile_with(text, &SkillDictionary::default())
}

/// Extracts a profile, inferring skills from `dictionary` when the resume has
/// no explicit skills block.
pub fn extract_profile_with(text: &str, dictionary: &SkillDictionary) -> ExtractedProfile {
    let lines = non_empty_lines(text);

    let email = find_email(text);
    let phone = find_phone(text);
    let links = find_links(text);
    let name = find_name(&lines, email.as_deref(), phone.as_deref());
    let location = find_location(&lines);
    let headline = find_headline(&lines, name.as_deref(), email.as_deref(), phone.as_deref());
    let skills = detect_skills(&lines, text, dictionary);

    debug!(
        lines = lines.len(),
        has_name = name.is_some(),
        has_email = email.is_some(),
        has_phone = phone.is_some(),
        links = links.len(),
        skills = skills.len(),
        "Profile extracted"
    );

    ExtractedProfile {
        name,
        email,
        phone,
        links,
        location,
        headline,
        skills,
    }
}

fn find_email(text: &str) -> Option<String> {
    RE_EMAIL.find(text).map(|m| m.as_str().to_string())
}

fn find_phone(text: &str) -> Option<String> {
    RE_PHONE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .map(String::from)
}

fn find_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    RE_LINK
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches([')', ',', '.', ';']).to_string())
        .filter(|link| !link.is_empty() && seen.insert(link.clone()))
        .collect()
}

/// True when `line` mentions a detected contact value or a URL.
fn is_contact_line(line: &str, email: Option<&str>, phone: Option<&str>) -> bool {
    email.is_some_and(|e| line.contains(e))
        || phone.is_some_and(|p| line.contains(p))
        || RE_URLISH.is_match(line)
}

fn find_name(lines: &[String], email: Option<&str>, phone: Option<&str>) -> Option<String> {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .filter(|l| !is_contact_line(l, email, phone))
        .find(|l| RE_NAME_SHAPE.is_match(l) && word_count(l) <= NAME_MAX_WORDS)
        .map(|l| collapse_spaces(l))
}

fn find_location(lines: &[String]) -> Option<String> {
    lines.iter().find(|l| RE_LOCATION.is_match(l)).cloned()
}

fn find_headline(
    lines: &[String],
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> Option<String> {
    lines
        .iter()
        .take(HEADLINE_SCAN_LINES)
        .filter(|l| Some(l.as_str()) != name)
        .filter(|l| !is_contact_line(l, email, phone))
        .find(|l| l.chars().count() >= HEADLINE_MIN_CHARS && word_count(l) <= HEADLINE_MAX_WORDS)
        .cloned()
}
