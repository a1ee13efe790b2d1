//! Fit Scoring: measures an extracted profile against a job description's
//! keyword inventory.
//!
//! Default: `KeywordFitScorer` (pure-Rust, deterministic). Callers hold a
//! `&dyn FitScorer` so another backend can be swapped in without touching them.

use serde::{Deserialize, Serialize};

use crate::extract::keywords::KeywordEntry;
use crate::extract::profile::ExtractedProfile;

const STRONG_THRESHOLD: f32 = 0.8;
const PARTIAL_THRESHOLD: f32 = 0.4;
const SKILL_MATCH_STRENGTH: f32 = 1.0;
const TEXT_MATCH_STRENGTH: f32 = 0.6;

/// A JD keyword covered by the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitMatch {
    pub keyword: String,
    /// Where the keyword was found: `"skills"` or `"resume text"`.
    pub evidence: String,
    pub strength: f32, // 0.0 – 1.0
}

/// A JD keyword the resume does not cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub keyword: String,
    pub jd_frequency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub overall_score: u32,             // 0 – 100
    pub strong_matches: Vec<FitMatch>,  // strength ≥ 0.8
    pub partial_matches: Vec<FitMatch>, // 0.4 – 0.79
    pub gaps: Vec<Gap>,                 // strength < 0.4
    pub recommendation: String,
    pub scorer_backend: String,
}

/// Resume text plus the profile extracted from it.
#[derive(Debug, Clone, Copy)]
pub struct FitInput<'a> {
    pub profile: &'a ExtractedProfile,
    pub resume_text: &'a str,
}

pub trait FitScorer: Send + Sync {
    fn score(&self, input: FitInput<'_>, keywords: &[KeywordEntry]) -> FitReport;
}

/// Keyword scorer.
///
/// 1. Per keyword: skill exact match (case-insensitive) → 1.0, resume text
///    containment → 0.6, otherwise 0.0.
/// 2. overall = Σ(strength × frequency) / Σ(frequency) × 100.
/// 3. strong ≥ 0.8, partial ≥ 0.4, else gap.
pub struct KeywordFitScorer;

impl FitScorer for KeywordFitScorer {
    fn score(&self, input: FitInput<'_>, keywords: &[KeywordEntry]) -> FitReport {
        compute_keyword_fit(input, keywords)
    }
}

fn compute_keyword_fit(input: FitInput<'_>, keywords: &[KeywordEntry]) -> FitReport {
    if keywords.is_empty() {
        return FitReport {
            overall_score: 0,
            strong_matches: vec![],
            partial_matches: vec![],
            gaps: vec![],
            recommendation: "No keywords found in the job description; cannot score fit."
                .to_string(),
            scorer_backend: "keyword".to_string(),
        };
    }

    let skills_lower: Vec<String> = input
        .profile
        .skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let text_lower = input.resume_text.to_lowercase();

    let mut strong_matches = Vec::new();
    let mut partial_matches = Vec::new();
    let mut gaps = Vec::new();
    let mut total_weight = 0.0_f32;
    let mut total_score = 0.0_f32;

    for entry in keywords {
        let keyword_lower = entry.keyword.to_lowercase();
        let weight = entry.frequency as f32;
        total_weight += weight;

        let (strength, evidence) = if skills_lower.iter().any(|s| *s == keyword_lower) {
            (SKILL_MATCH_STRENGTH, "skills")
        } else if text_lower.contains(&keyword_lower) {
            (TEXT_MATCH_STRENGTH, "resume text")
        } else {
            (0.0, "")
        };
        total_score += strength * weight;

        if strength >= STRONG_THRESHOLD {
            strong_matches.push(FitMatch {
                keyword: entry.keyword.clone(),
                evidence: evidence.to_string(),
                strength,
            });
        } else if strength >= PARTIAL_THRESHOLD {
            partial_matches.push(FitMatch {
                keyword: entry.keyword.clone(),
                evidence: evidence.to_string(),
                strength,
            });
        } else {
            gaps.push(Gap {
                keyword: entry.keyword.clone(),
                jd_frequency: entry.frequency,
            });
        }
    }

    let overall_score = if total_weight > 0.0 {
        ((total_score / total_weight) * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    FitReport {
        overall_score,
        strong_matches,
        partial_matches,
        recommendation: build_recommendation(overall_score, &gaps),
        gaps,
        scorer_backend: "keyword".to_string(),
    }
}

fn build_recommendation(score: u32, gaps: &[Gap]) -> String {
    let top_gaps: Vec<&str> = gaps.iter().take(3).map(|g| g.keyword.as_str()).collect();

    if score >= 80 {
        "Strong fit. The resume already covers the key job requirements.".to_string()
    } else if score >= 60 {
        format!(
            "Moderate fit ({score}/100). Consider highlighting: {}.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "Low fit ({score}/100). Significant gaps: {}. Tailor the resume before applying.",
            top_gaps.join(", ")
        )
    }
}
