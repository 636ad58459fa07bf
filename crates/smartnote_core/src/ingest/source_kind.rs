//! Source kind detection from MIME type or file extension.

use std::path::Path;

/// Kind of upstream extraction a file needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    /// Scanned page or photo; needs OCR.
    Image,
    Pdf,
    /// Recording; needs speech-to-text.
    Audio,
    /// Already plain text.
    Text,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "m4a", "ogg", "flac", "webm"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

impl SourceKind {
    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Audio => "audio",
            Self::Text => "text",
        }
    }

    /// Maps a MIME type to a source kind.
    ///
    /// Parameters such as `; charset=utf-8` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if essence.starts_with("image/") {
            return Some(Self::Image);
        }
        if essence == "application/pdf" {
            return Some(Self::Pdf);
        }
        if essence.starts_with("audio/") {
            return Some(Self::Audio);
        }
        if essence.starts_with("text/") {
            return Some(Self::Text);
        }
        None
    }

    /// Maps a file path to a source kind by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        let extension = extension.as_str();
        if IMAGE_EXTENSIONS.contains(&extension) {
            Some(Self::Image)
        } else if extension == "pdf" {
            Some(Self::Pdf)
        } else if AUDIO_EXTENSIONS.contains(&extension) {
            Some(Self::Audio)
        } else if TEXT_EXTENSIONS.contains(&extension) {
            Some(Self::Text)
        } else {
            None
        }
    }
}
