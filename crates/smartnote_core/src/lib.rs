//! Core domain logic for SmartNote.
//! Turns extracted document text into structured notes: subject, key points,
//! title, tags and date.

pub mod analysis;
pub mod ingest;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod service;

pub use analysis::{
    classify, derive_title, estimate_date, extract_key_points, generate_tags, normalize,
    subject_scores,
};
pub use ingest::{
    load_source_document, load_source_document_as, ExtractorRegistry, IngestError, IngestResult,
    PlainTextExtractor, SourceKind, TextExtractor,
};
pub use lexicon::{builtin_lexicon, Lexicon, LexiconEntry, LexiconError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::note::{ClassificationResult, Note, SourceDocument, GENERAL_SUBJECT};
pub use service::organizer_service::{assemble_note, FileOutcome, NoteOrganizer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
