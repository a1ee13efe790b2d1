//! Job-description keyword inventory: the most frequent non-stopword tokens.
//!
//! Sentence-final periods are trimmed so `kubernetes.` and `kubernetes` count
//! as one keyword; inner dots (`node.js`) are kept.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default number of keywords kept from a job description.
pub const DEFAULT_KEYWORD_LIMIT: usize = 12;

static RE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][a-z0-9+\-#.]{2,}").unwrap());

const STOP_WORDS: &[&str] = &[
    "and", "the", "with", "for", "you", "are", "that", "this", "job", "role", "will", "work",
    "team", "our", "your",
];

/// A single keyword from a job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
}

/// Counts keywords in `jd_text` and returns the `limit` most frequent.
/// Ties keep first-seen order.
pub fn extract_keywords(jd_text: &str, limit: usize) -> Vec<KeywordEntry> {
    let lower = jd_text.to_lowercase();
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();

    for m in RE_KEYWORD.find_iter(&lower) {
        let word = m.as_str().trim_end_matches('.');
        if word.len() < 3 || STOP_WORDS.contains(&word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut entries: Vec<KeywordEntry> = order
        .into_iter()
        .map(|word| KeywordEntry {
            keyword: word.to_string(),
            frequency: counts[word],
        })
        .collect();
    // Stable sort: equal frequencies stay in first-seen order.
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Senior Rust Engineer. You will build Rust services on Kubernetes. \
        Rust and Kafka experience required; Kubernetes a plus. Join our team.";

    #[test]
    fn test_most_frequent_first() {
        let kws = extract_keywords(JD, DEFAULT_KEYWORD_LIMIT);
        assert_eq!(kws[0].keyword, "rust");
        assert_eq!(kws[0].frequency, 3);
        assert_eq!(kws[1].keyword, "kubernetes");
        assert_eq!(kws[1].frequency, 2);
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let kws = extract_keywords(JD, 50);
        let words: Vec<&str> = kws.iter().map(|k| k.keyword.as_str()).collect();
        assert!(!words.contains(&"you"));
        assert!(!words.contains(&"team"));
        assert!(!words.contains(&"a"));
        assert!(!words.contains(&"on"));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let kws = extract_keywords("gamma alpha beta", 10);
        let words: Vec<&str> = kws.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(words, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_limit_applied() {
        let jd = (0..30).map(|i| format!("skill{i:02}")).collect::<Vec<_>>().join(" ");
        assert_eq!(extract_keywords(&jd, DEFAULT_KEYWORD_LIMIT).len(), DEFAULT_KEYWORD_LIMIT);
    }

    #[test]
    fn test_symbols_kept_inside_tokens() {
        let kws = extract_keywords("c++ and c# and node.js", 10);
        let words: Vec<&str> = kws.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(words, vec!["c++", "node.js"]);
    }

    #[test]
    fn test_empty_jd() {
        assert!(extract_keywords("", 12).is_empty());
    }
}
