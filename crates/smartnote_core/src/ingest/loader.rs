//! Filesystem loading of source documents.

use crate::ingest::{ExtractorRegistry, IngestError, IngestResult, SourceKind};
use crate::model::note::SourceDocument;
use chrono::{DateTime, Utc};
use log::debug;
use std::path::Path;

/// Reads `path`, extracts its text and captures file metadata.
///
/// The source kind comes from the file extension.
///
/// # Errors
/// - `UnsupportedFormat` when the extension maps to no source kind.
/// - `NoExtractor` when the kind has no registered extractor.
/// - `Io` when the file cannot be read.
/// - Extractor failures are returned unchanged.
pub fn load_source_document(
    path: &Path,
    registry: &ExtractorRegistry,
) -> IngestResult<SourceDocument> {
    load_source_document_as(path, None, registry)
}

/// Same as [`load_source_document`], but a declared MIME type, when given,
/// decides the source kind instead of the extension.
pub fn load_source_document_as(
    path: &Path,
    mime: Option<&str>,
    registry: &ExtractorRegistry,
) -> IngestResult<SourceDocument> {
    let kind = detect_kind(path, mime)?;
    let extractor = registry.get(kind)?;

    let io_error = |err: std::io::Error| IngestError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    };
    let bytes = std::fs::read(path).map_err(io_error)?;
    let last_modified_ms = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(|modified| DateTime::<Utc>::from(modified).timestamp_millis());

    let raw_text = extractor.extract(&bytes)?;
    debug!(
        "event=source_loaded module=ingest status=ok kind={} bytes={} chars={}",
        kind.as_str(),
        bytes.len(),
        raw_text.chars().count()
    );

    Ok(SourceDocument {
        raw_text,
        file_name: file_name_of(path),
        last_modified_ms,
    })
}

fn detect_kind(path: &Path, mime: Option<&str>) -> IngestResult<SourceKind> {
    match mime {
        Some(mime) => SourceKind::from_mime(mime)
            .ok_or_else(|| IngestError::UnsupportedFormat(mime.to_string())),
        None => SourceKind::from_path(path)
            .ok_or_else(|| IngestError::UnsupportedFormat(path.display().to_string())),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
