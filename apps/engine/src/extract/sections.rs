//! Section splitter: groups resume lines under the common headings and breaks
//! each section body into discrete items.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::text::{normalize_newlines, strip_bullet};

static RE_SKILL_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n•\-–,·]+").unwrap());

/// The section a heading line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
}

/// Heading spellings, matched case-insensitively against a whole line.
const HEADINGS: &[(&str, SectionKind)] = &[
    ("SUMMARY", SectionKind::Summary),
    ("PROFESSIONAL SUMMARY", SectionKind::Summary),
    ("PROFILE", SectionKind::Summary),
    ("CORE SKILLS", SectionKind::Skills),
    ("SKILLS", SectionKind::Skills),
    ("TECHNICAL SKILLS", SectionKind::Skills),
    ("PROFESSIONAL EXPERIENCE", SectionKind::Experience),
    ("EXPERIENCE", SectionKind::Experience),
    ("WORK EXPERIENCE", SectionKind::Experience),
    ("EDUCATION", SectionKind::Education),
    ("PROJECTS", SectionKind::Projects),
    ("SELECT PROJECTS", SectionKind::Projects),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    /// First line of the chunk, usually role / company / dates.
    pub header: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBlock {
    pub header: String,
    pub text: String,
}

/// Named sections of a resume. Sections that are absent stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceBlock>,
    pub education: Vec<String>,
    pub projects: Vec<ProjectBlock>,
}

/// Returns the section a line opens, if it is a bare heading (optionally
/// followed by a colon).
pub fn heading_kind(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim();
    HEADINGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, kind)| *kind)
}

/// Splits `text` into named sections. Text before the first heading is ignored
/// and the first occurrence of a repeated section wins.
pub fn extract_sections(text: &str) -> ResumeSections {
    let normalized = normalize_newlines(text);
    let mut bodies: Vec<(SectionKind, Vec<&str>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in normalized.lines() {
        if let Some(kind) = heading_kind(line) {
            current = if bodies.iter().any(|(k, _)| *k == kind) {
                None
            } else {
                bodies.push((kind, Vec::new()));
                Some(bodies.len() - 1)
            };
            continue;
        }
        if let Some(idx) = current {
            bodies[idx].1.push(line);
        }
    }

    let mut sections = ResumeSections::default();
    for (kind, lines) in &bodies {
        match kind {
            SectionKind::Summary => sections.summary = parse_summary(lines),
            SectionKind::Skills => sections.skills = parse_skill_items(lines),
            SectionKind::Experience => sections.experience = parse_experience(lines),
            SectionKind::Education => sections.education = parse_education(lines),
            SectionKind::Projects => sections.projects = parse_projects(lines),
        }
    }
    sections
}

fn parse_summary(lines: &[&str]) -> Option<String> {
    let joined = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

fn parse_skill_items(lines: &[&str]) -> Vec<String> {
    RE_SKILL_SEPARATORS
        .split(&lines.join("\n"))
        .map(str::trim)
        .filter(|s| s.chars().count() > 1)
        .map(String::from)
        .collect()
}

/// Groups lines into blank-line separated chunks of trimmed, non-empty lines.
fn chunks<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut out: Vec<Vec<&'a str>> = Vec::new();
    let mut current: Vec<&'a str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn parse_experience(lines: &[&str]) -> Vec<ExperienceBlock> {
    chunks(lines)
        .into_iter()
        .filter_map(|chunk| {
            let (header, rest) = chunk.split_first()?;
            Some(ExperienceBlock {
                header: header.to_string(),
                bullets: rest
                    .iter()
                    .map(|l| strip_bullet(l))
                    .filter(|b| !b.is_empty())
                    .collect(),
            })
        })
        .collect()
}

fn parse_education(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|l| strip_bullet(l))
        .filter(|l| !l.is_empty())
        .collect()
}

fn parse_projects(lines: &[&str]) -> Vec<ProjectBlock> {
    chunks(lines)
        .into_iter()
        .filter_map(|chunk| {
            let (header, rest) = chunk.split_first()?;
            Some(ProjectBlock {
                header: header.to_string(),
                text: rest.join(" "),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAILORED: &str = "Jane Doe\n\
        Senior ML Engineer\n\
        jane@example.com\n\
        \n\
        SUMMARY\n\
        Engineer with 8 years of experience\n\
        shipping ML platforms.\n\
        \n\
        CORE SKILLS\n\
        Python • PyTorch, Kubernetes\n\
        \n\
        PROFESSIONAL EXPERIENCE\n\
        Senior Engineer | Acme    2020 - Present\n\
        - Built the feature store\n\
        • Cut latency by 40%\n\
        \n\
        ML Engineer | Beta    2017 - 2020\n\
        - Shipped ranking models\n\
        \n\
        EDUCATION\n\
        - BSc Computer Science, State University\n\
        \n\
        Projects:\n\
        Open-source vector index\n\
        Rust crate for ANN search.\n\
        Used in production.\n";

    #[test]
    fn test_heading_kind_case_and_colon() {
        assert_eq!(heading_kind("Experience:"), Some(SectionKind::Experience));
        assert_eq!(heading_kind("  core skills  "), Some(SectionKind::Skills));
        assert_eq!(heading_kind("Experience at Acme"), None);
    }

    #[test]
    fn test_summary_joined() {
        let s = extract_sections(TAILORED);
        assert_eq!(
            s.summary.as_deref(),
            Some("Engineer with 8 years of experience shipping ML platforms.")
        );
    }

    #[test]
    fn test_skills_split_on_separators() {
        let s = extract_sections(TAILORED);
        assert_eq!(s.skills, vec!["Python", "PyTorch", "Kubernetes"]);
    }

    #[test]
    fn test_experience_chunks_and_bullets() {
        let s = extract_sections(TAILORED);
        assert_eq!(s.experience.len(), 2);
        assert_eq!(s.experience[0].header, "Senior Engineer | Acme    2020 - Present");
        assert_eq!(
            s.experience[0].bullets,
            vec!["Built the feature store", "Cut latency by 40%"]
        );
        assert_eq!(s.experience[1].bullets, vec!["Shipped ranking models"]);
    }

    #[test]
    fn test_education_and_projects() {
        let s = extract_sections(TAILORED);
        assert_eq!(s.education, vec!["BSc Computer Science, State University"]);
        assert_eq!(s.projects.len(), 1);
        assert_eq!(s.projects[0].header, "Open-source vector index");
        assert_eq!(s.projects[0].text, "Rust crate for ANN search. Used in production.");
    }

    #[test]
    fn test_first_duplicate_section_wins() {
        let s = extract_sections("SUMMARY\nfirst\nSUMMARY\nsecond\n");
        assert_eq!(s.summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_no_headings_yields_empty_sections() {
        assert_eq!(
            extract_sections("just a paragraph of text"),
            ResumeSections::default()
        );
    }
}
