//! Textual cleanup of raw model output before parsing.
//!
//! The model wraps JSON in markdown fences often enough that every feature
//! strips them; nothing here attempts to repair malformed JSON.

use once_cell::sync::Lazy;
use regex::Regex;

static SUMMARY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:here's a summary:?\s*|summary:?\s*)")
        .expect("SUMMARY_PREFIX is a valid regex pattern")
});

/// Removes ```json / ``` fence markers and surrounding whitespace. Only the
/// two fence patterns the model is known to emit; idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Summaries are returned as-is apart from a leading "Summary:" style
/// preamble and stray fence markers.
pub fn clean_summary(raw: &str) -> String {
    let without_fences = raw.replace("```", "");
    let trimmed = without_fences.trim();
    SUMMARY_PREFIX.replace(trimmed, "").trim().to_string()
}
