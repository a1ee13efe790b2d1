//! Flat resume text → header fields + classified body lines.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extract::text::normalize_newlines;
use crate::layout::classify::{classify, LineKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    /// Raw line with trailing whitespace removed.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocumentModel {
    pub header_name: String,
    pub header_subtitle: String,
    pub header_contact: String,
    pub body_lines: Vec<ClassifiedLine>,
}

impl ResumeDocumentModel {
    /// The first three non-empty lines are name, subtitle and contact, in that
    /// order; their content is not checked. Everything after the third one is
    /// body, blank lines included.
    pub fn parse(text: &str) -> Self {
        let normalized = normalize_newlines(text);
        let mut lines = normalized.lines().map(str::trim_end);

        let mut header: Vec<String> = Vec::with_capacity(3);
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            header.push(line.trim().to_string());
            if header.len() == 3 {
                break;
            }
        }
        if !header.is_empty() && header.len() < 3 {
            warn!(
                header_lines = header.len(),
                "fewer than three header lines; missing fields left empty"
            );
        }

        let body_lines = lines
            .map(|line| ClassifiedLine {
                kind: classify(line),
                text: line.to_string(),
            })
            .collect();

        let mut header = header.into_iter();
        Self {
            header_name: header.next().unwrap_or_default(),
            header_subtitle: header.next().unwrap_or_default(),
            header_contact: header.next().unwrap_or_default(),
            body_lines,
        }
    }
}
