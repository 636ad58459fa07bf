//! Text extractor SPI and in-process registry.

use crate::ingest::{IngestError, IngestResult, SourceKind};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Converts one file payload of a given kind into plain text.
///
/// OCR, PDF and speech collaborators implement this outside core.
pub trait TextExtractor: Send + Sync {
    /// Kind of source this extractor handles.
    fn kind(&self) -> SourceKind;
    /// Extracts the complete text of `bytes`.
    fn extract(&self, bytes: &[u8]) -> IngestResult<String>;
}

/// Built-in extractor for already-textual sources.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn kind(&self) -> SourceKind {
        SourceKind::Text
    }

    fn extract(&self, bytes: &[u8]) -> IngestResult<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Extractors keyed by source kind; at most one per kind.
#[derive(Default, Clone)]
pub struct ExtractorRegistry {
    extractors: BTreeMap<SourceKind, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the in-tree plain-text extractor.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .extractors
            .insert(SourceKind::Text, Arc::new(PlainTextExtractor));
        registry
    }

    /// Registers one extractor; rejects a second extractor for the same kind.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) -> IngestResult<()> {
        let kind = extractor.kind();
        if self.extractors.contains_key(&kind) {
            return Err(IngestError::DuplicateExtractor(kind));
        }
        self.extractors.insert(kind, extractor);
        Ok(())
    }

    /// Returns the extractor for `kind`.
    pub fn get(&self, kind: SourceKind) -> IngestResult<Arc<dyn TextExtractor>> {
        self.extractors
            .get(&kind)
            .cloned()
            .ok_or(IngestError::NoExtractor(kind))
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<SourceKind> {
        self.extractors.keys().copied().collect()
    }

    /// Runs the registered extractor for `kind` over `bytes`.
    pub fn extract(&self, kind: SourceKind, bytes: &[u8]) -> IngestResult<String> {
        self.get(kind)?.extract(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtractorRegistry, PlainTextExtractor, TextExtractor};
    use crate::ingest::{IngestError, IngestResult, SourceKind};
    use std::sync::Arc;

    struct FailingOcr;

    impl TextExtractor for FailingOcr {
        fn kind(&self) -> SourceKind {
            SourceKind::Image
        }

        fn extract(&self, _bytes: &[u8]) -> IngestResult<String> {
            Err(IngestError::ExtractionFailed {
                kind: SourceKind::Image,
                message: "OCR processing failed".to_string(),
            })
        }
    }

    #[test]
    fn defaults_only_cover_text() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(registry.kinds(), vec![SourceKind::Text]);
        assert_eq!(
            registry.extract(SourceKind::Pdf, b"%PDF").unwrap_err(),
            IngestError::NoExtractor(SourceKind::Pdf)
        );
    }

    #[test]
    fn plain_text_is_decoded_lossily() {
        let text = PlainTextExtractor.extract(b"caf\xff notes").unwrap();
        assert_eq!(text, "caf\u{fffd} notes");
    }

    #[test]
    fn register_rejects_duplicate_kind() {
        let mut registry = ExtractorRegistry::with_defaults();
        let err = registry.register(Arc::new(PlainTextExtractor)).unwrap_err();
        assert_eq!(err, IngestError::DuplicateExtractor(SourceKind::Text));
    }

    #[test]
    fn registered_extractor_errors_pass_through() {
        let mut registry = ExtractorRegistry::with_defaults();
        registry.register(Arc::new(FailingOcr)).unwrap();
        let err = registry.extract(SourceKind::Image, b"\x89PNG").unwrap_err();
        assert!(matches!(
            err,
            IngestError::ExtractionFailed {
                kind: SourceKind::Image,
                ..
            }
        ));
    }
}
