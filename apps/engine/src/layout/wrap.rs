//! Greedy word wrap against an injected measurer.

use crate::layout::font_metrics::{FontWeight, TextMeasurer};

/// Breaks `text` into lines no wider than `max_width` points.
///
/// Words are whitespace-separated. A word wider than `max_width` still gets a
/// line of its own; it is never split. Blank text yields no lines.
pub fn wrap_text(
    text: &str,
    size: f32,
    weight: FontWeight,
    max_width: f32,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measurer.measure(&candidate, size, weight) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
