//! Skill detection: an explicit "Skills" block when the resume has one,
//! otherwise a dictionary scan over the whole text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of skills reported for a profile.
pub const MAX_SKILLS: usize = 24;

/// Lines scanned after the "Skills" heading.
const SKILLS_BLOCK_LINES: usize = 7;

static RE_SKILLS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^skills\b").unwrap());
static RE_NEXT_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z\s]{0,20}:$").unwrap());
static RE_SKILL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+\-#.]+").unwrap());

/// Common technical terms, matched in this order.
const DEFAULT_SKILL_TERMS: &[&str] = &[
    "python",
    "sql",
    "pandas",
    "numpy",
    "pytorch",
    "tensorflow",
    "scikit-learn",
    "spark",
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "airflow",
    "mlflow",
    "terraform",
    "langchain",
    "rag",
    "faiss",
    "pinecone",
    "vertex",
    "sagemaker",
    "fastapi",
    "react",
    "postgres",
    "bigquery",
    "git",
    "bash",
    "linux",
];

/// Ordered keyword list used when a resume has no explicit skills block.
///
/// Matching is case-insensitive substring containment, so short terms such as
/// `git` also hit inside longer words. Terms are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDictionary {
    terms: Vec<String>,
}

impl SkillDictionary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns dictionary terms contained in `text`, in dictionary order.
    pub fn infer(&self, text: &str, cap: usize) -> Vec<String> {
        let lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| lower.contains(term.as_str()))
            .take(cap)
            .cloned()
            .collect()
    }
}

impl Default for SkillDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_TERMS.iter().copied())
    }
}

/// Collects the text of an explicit skills block, if the resume has one.
///
/// The block is whatever follows a colon on the heading line plus up to seven
/// following lines, stopping at the next `Heading:` line.
pub fn find_skills_block(lines: &[String]) -> Option<String> {
    let heading_idx = lines.iter().position(|l| RE_SKILLS_HEADING.is_match(l))?;

    let mut bucket: Vec<&str> = Vec::new();
    if let Some((_, inline)) = lines[heading_idx].split_once(':') {
        let inline = inline.trim();
        if !inline.is_empty() {
            bucket.push(inline);
        }
    }

    let end = lines.len().min(heading_idx + 1 + SKILLS_BLOCK_LINES);
    for row in &lines[heading_idx + 1..end] {
        if RE_NEXT_SECTION.is_match(row) {
            break;
        }
        bucket.push(row);
    }

    Some(bucket.join(", "))
}

/// Splits a skills block into tokens, keeping `+ - # .` inside a token.
pub fn tokenize_skills(block: &str, cap: usize) -> Vec<String> {
    RE_SKILL_TOKEN
        .find_iter(block)
        .map(|m| {
            let token = m.as_str();
            token.strip_suffix('.').unwrap_or(token).to_string()
        })
        .filter(|t| t.chars().count() >= 2)
        .take(cap)
        .collect()
}

/// Explicit skills block first; dictionary inference when it yields nothing.
pub fn detect_skills(lines: &[String], text: &str, dictionary: &SkillDictionary) -> Vec<String> {
    let explicit = find_skills_block(lines)
        .map(|block| tokenize_skills(&block, MAX_SKILLS))
        .unwrap_or_default();

    if explicit.is_empty() {
        dictionary.infer(text, MAX_SKILLS)
    } else {
        explicit
    }
}
