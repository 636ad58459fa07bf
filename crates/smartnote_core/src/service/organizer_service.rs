//! Note organizer use-case service.
//!
//! # Responsibility
//! - Run normalize -> classify -> summarize -> title -> tags -> date for one
//!   source document and return a complete `Note`.
//! - Wrap file ingestion so batch callers get per-file results.
//!
//! # Invariants
//! - Assembly is total: every `SourceDocument` yields a `Note`.
//! - The organizer holds only an immutable lexicon, so one instance can be
//!   shared across threads without coordination.
//! - Logged events carry metadata only, never document text.

use crate::analysis::{
    classify, derive_title, estimate_date, extract_key_points, generate_tags, normalize,
};
use crate::ingest::{load_source_document_as, ExtractorRegistry, IngestResult};
use crate::lexicon::Lexicon;
use crate::model::note::{Note, SourceDocument};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Per-file outcome of [`NoteOrganizer::organize_files`].
#[derive(Debug)]
pub struct FileOutcome {
    /// Path as given by the caller.
    pub path: PathBuf,
    pub result: IngestResult<Note>,
}

impl FileOutcome {
    /// File name used in per-file error reports.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Note organizer configured with one immutable lexicon.
#[derive(Debug, Clone, Default)]
pub struct NoteOrganizer {
    lexicon: Lexicon,
}

impl NoteOrganizer {
    /// Creates an organizer using the provided lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Lexicon used for classification and tags.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Assembles one note, dating undated documents with the current time.
    pub fn assemble(&self, document: &SourceDocument) -> Note {
        self.assemble_at(document, Utc::now())
    }

    /// Assembles one note using `now` as the processing time.
    pub fn assemble_at(&self, document: &SourceDocument, now: DateTime<Utc>) -> Note {
        assemble_note_at(&self.lexicon, document, now)
    }

    /// Loads, extracts and assembles one file.
    pub fn organize_file(&self, path: &Path, registry: &ExtractorRegistry) -> IngestResult<Note> {
        self.organize_file_as(path, None, registry)
    }

    /// Like [`Self::organize_file`], with an optional declared MIME type.
    pub fn organize_file_as(
        &self,
        path: &Path,
        mime: Option<&str>,
        registry: &ExtractorRegistry,
    ) -> IngestResult<Note> {
        let document = load_source_document_as(path, mime, registry)?;
        Ok(self.assemble(&document))
    }

    /// Organizes files in order; a failing file does not stop the rest.
    pub fn organize_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
        registry: &ExtractorRegistry,
    ) -> Vec<FileOutcome> {
        self.organize_files_as(paths, None, registry)
    }

    /// Like [`Self::organize_files`], applying one declared MIME type to
    /// every file.
    pub fn organize_files_as<P: AsRef<Path>>(
        &self,
        paths: &[P],
        mime: Option<&str>,
        registry: &ExtractorRegistry,
    ) -> Vec<FileOutcome> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let result = self.organize_file_as(path, mime, registry);
                if let Err(err) = &result {
                    warn!(
                        "event=file_organize module=organizer status=error reason={}",
                        err
                    );
                }
                FileOutcome {
                    path: path.to_path_buf(),
                    result,
                }
            })
            .collect()
    }
}

/// Assembles one note against `lexicon`, dated with the current time.
pub fn assemble_note(lexicon: &Lexicon, document: &SourceDocument) -> Note {
    assemble_note_at(lexicon, document, Utc::now())
}

fn assemble_note_at(lexicon: &Lexicon, document: &SourceDocument, now: DateTime<Utc>) -> Note {
    let full_text = normalize(&document.raw_text);
    let classification = classify(&full_text, lexicon);
    let summary_points = extract_key_points(&full_text);
    let title = derive_title(&full_text, &document.file_name);
    let tags = generate_tags(&full_text, &classification.subject, lexicon);
    let date = estimate_date(document.last_modified_ms, now);

    debug!(
        "event=note_assembled module=organizer status=ok subject={} score={} points={} tags={} chars={}",
        classification.subject,
        classification.score,
        summary_points.len(),
        tags.len(),
        full_text.chars().count()
    );

    Note {
        title,
        date,
        subject: classification.subject,
        summary_points,
        full_text,
        tags,
    }
}
