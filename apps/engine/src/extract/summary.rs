//! Quick summary: three short sentences and a few highlight bullets for the
//! resume preview panel.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::text::{clean, normalize_newlines};

const MAX_HIGHLIGHTS: usize = 3;

static RE_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)senior|lead|engineer|scientist|mlops|data|\bai\b").unwrap()
});
static RE_TECH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)python|pytorch|tensorflow|sklearn|langchain|llm|rag|mistral|llama|openai|vertex|gcp|aws|azure|kubernetes|docker|airflow|mlflow|faiss|\bray\b",
    )
    .unwrap()
});
static RE_IMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)improv|reduce|increase|optimi|deploy|scale|built|designed|integrat|launched")
        .unwrap()
});
static RE_BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-•]\s*").unwrap());
static RE_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\+?\s*(?:years|yrs)").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSummary {
    pub years_experience: Option<u32>,
    pub sentences: Vec<String>,
    pub highlights: Vec<String>,
}

/// Builds a quick summary. Blank input yields an empty summary.
pub fn quick_summary(text: &str) -> QuickSummary {
    if text.trim().is_empty() {
        return QuickSummary::default();
    }

    let normalized = normalize_newlines(text);
    let lines: Vec<String> = normalized
        .lines()
        .map(clean)
        .filter(|l| !l.is_empty())
        .collect();

    let role_lines: Vec<&String> = lines.iter().filter(|l| RE_ROLE.is_match(l)).collect();
    let tech_lines: Vec<&String> = lines.iter().filter(|l| RE_TECH.is_match(l)).collect();
    let impact_lines: Vec<&String> = lines
        .iter()
        .filter(|l| RE_IMPACT.is_match(l) || RE_BULLET_PREFIX.is_match(l))
        .collect();

    let years_experience = RE_YEARS
        .captures(&normalized)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    let mut sentences = Vec::with_capacity(3);
    sentences.push(match years_experience {
        Some(years) => format!(
            "Candidate has ~{years} years of experience building production systems."
        ),
        None => "Candidate shows hands-on experience building production systems.".to_string(),
    });

    sentences.push(if let Some(role) = role_lines.first() {
        format!("Recent role highlight: {role}.")
    } else if let Some(tech) = tech_lines.first() {
        format!("Notable technologies: {tech}.")
    } else {
        "Experienced with modern platforms and tooling.".to_string()
    });

    if let Some(tech) = tech_lines.get(1) {
        sentences.push(format!("Additional tools: {tech}."));
    } else if let Some(impact) = impact_lines.first() {
        sentences.push(format!(
            "Track record: {}.",
            RE_BULLET_PREFIX.replace(impact, "")
        ));
    }

    let highlights = impact_lines
        .iter()
        .map(|l| RE_BULLET_PREFIX.replace(l, "").to_string())
        .chain(tech_lines.iter().take(2).map(|t| format!("Tech: {t}")))
        .map(|b| clean(&b))
        .filter(|b| !b.is_empty())
        .take(MAX_HIGHLIGHTS)
        .collect();

    QuickSummary {
        years_experience,
        sentences,
        highlights,
    }
}
