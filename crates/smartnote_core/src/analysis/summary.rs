//! Extractive key-point selection.
//!
//! # Invariants
//! - Output holds 1..=5 entries.
//! - At most the first five candidate sentences are considered; a candidate
//!   of 21..=30 chars takes one of those slots without being emitted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on emitted key points.
pub const MAX_KEY_POINTS: usize = 5;
/// Placeholder emitted when no sentence qualifies as a key point.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "Content extracted successfully";

// Both bounds are exclusive.
const MIN_CANDIDATE_CHARS: usize = 20;
const MIN_POINT_CHARS: usize = 30;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence break regex"));

/// Selects key points from normalized text.
pub fn extract_key_points(normalized: &str) -> Vec<String> {
    let points = SENTENCE_BREAK_RE
        .split(normalized)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_CANDIDATE_CHARS)
        .take(MAX_KEY_POINTS)
        .filter(|sentence| sentence.chars().count() > MIN_POINT_CHARS)
        .map(str::to_string)
        .collect::<Vec<_>>();

    if points.is_empty() {
        return vec![EMPTY_SUMMARY_PLACEHOLDER.to_string()];
    }
    points
}
