//! Source document and note records.
//!
//! # Invariants
//! - `Note::summary_points` holds 1..=5 entries.
//! - `Note::tags` holds 1..=6 unique entries in insertion order.
//! - `Note::date` is formatted `YYYY-MM-DD` (UTC).

use serde::{Deserialize, Serialize};

/// Subject reported when no lexicon subject scores above zero.
pub const GENERAL_SUBJECT: &str = "General";

/// Plain-text extraction output for one processed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Text produced by OCR / PDF / speech / plain-text extraction.
    pub raw_text: String,
    /// Original file name including extension.
    pub file_name: String,
    /// Unix epoch milliseconds of the file's last modification, if known.
    pub last_modified_ms: Option<i64>,
}

impl SourceDocument {
    pub fn new(raw_text: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            file_name: file_name.into(),
            last_modified_ms: None,
        }
    }

    /// Sets the last-modified timestamp in epoch milliseconds.
    pub fn with_last_modified_ms(mut self, last_modified_ms: i64) -> Self {
        self.last_modified_ms = Some(last_modified_ms);
        self
    }
}

/// Winning subject and its keyword-occurrence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub subject: String,
    pub score: u64,
}

impl ClassificationResult {
    /// Sentinel result for text that matches no lexicon keyword.
    pub fn general() -> Self {
        Self {
            subject: GENERAL_SUBJECT.to_string(),
            score: 0,
        }
    }

    pub fn is_general(&self) -> bool {
        self.score == 0 && self.subject == GENERAL_SUBJECT
    }
}

/// Structured note assembled from one source document.
///
/// Field names are part of the external JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub subject: String,
    pub summary_points: Vec<String>,
    /// Normalized text the note was derived from.
    pub full_text: String,
    pub tags: Vec<String>,
}
