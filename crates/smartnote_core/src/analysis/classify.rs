//! Keyword-scoring subject classifier.
//!
//! Scoring is a literal, unanchored, case-insensitive substring count; it is
//! not a tokenizer, so keywords also match inside longer words.

use crate::lexicon::Lexicon;
use crate::model::note::ClassificationResult;

/// Scores every lexicon subject against `normalized`, in declaration order.
pub fn subject_scores(normalized: &str, lexicon: &Lexicon) -> Vec<ClassificationResult> {
    let text_lower = normalized.to_lowercase();
    lexicon
        .entries()
        .iter()
        .map(|entry| ClassificationResult {
            subject: entry.subject.clone(),
            score: keyword_score(&text_lower, &entry.keywords),
        })
        .collect()
}

/// Picks the best-scoring subject.
///
/// A later subject replaces the leader only with a strictly greater score,
/// so ties go to the subject declared first. Returns `General`/0 when no
/// subject scores above zero.
pub fn classify(normalized: &str, lexicon: &Lexicon) -> ClassificationResult {
    subject_scores(normalized, lexicon).into_iter().fold(
        ClassificationResult::general(),
        |leader, candidate| {
            if candidate.score > leader.score {
                candidate
            } else {
                leader
            }
        },
    )
}

fn keyword_score(text_lower: &str, keywords: &[String]) -> u64 {
    keywords
        .iter()
        .map(|keyword| count_occurrences(text_lower, &keyword.to_lowercase()))
        .sum()
}

/// Non-overlapping, left-to-right occurrence count.
fn count_occurrences(haystack: &str, needle: &str) -> u64 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u64
}
