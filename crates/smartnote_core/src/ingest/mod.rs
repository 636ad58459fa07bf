//! Ingestion boundary between extraction collaborators and the organizer.
//!
//! # Responsibility
//! - Classify incoming files by source kind (image/pdf/audio/text).
//! - Dispatch byte payloads to registered text extractors.
//! - Build `SourceDocument` records from filesystem paths.
//!
//! # Invariants
//! - Every failure here is reported as a classified `IngestError` before the
//!   organizer pipeline runs; the pipeline itself never fails.
//! - Extractors hand over completed strings, never streams.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod extractor;
pub mod loader;
pub mod source_kind;

pub use extractor::{ExtractorRegistry, PlainTextExtractor, TextExtractor};
pub use loader::{load_source_document, load_source_document_as};
pub use source_kind::SourceKind;

pub type IngestResult<T> = Result<T, IngestError>;

/// Classified ingestion failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// MIME type or extension does not map to a supported source kind.
    UnsupportedFormat(String),
    /// Source kind is supported but no extractor is registered for it.
    NoExtractor(SourceKind),
    /// Extractor ran and failed.
    ExtractionFailed { kind: SourceKind, message: String },
    /// File could not be read.
    Io { path: String, message: String },
    /// Registry already holds an extractor for this kind.
    DuplicateExtractor(SourceKind),
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(value) => write!(f, "unsupported file type: `{value}`"),
            Self::NoExtractor(kind) => {
                write!(f, "no text extractor registered for {} sources", kind.as_str())
            }
            Self::ExtractionFailed { kind, message } => {
                write!(f, "{} text extraction failed: {message}", kind.as_str())
            }
            Self::Io { path, message } => write!(f, "failed to read `{path}`: {message}"),
            Self::DuplicateExtractor(kind) => write!(
                f,
                "text extractor already registered for {} sources",
                kind.as_str()
            ),
        }
    }
}

impl Error for IngestError {}
