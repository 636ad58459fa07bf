//! Title derivation from leading words, with file-name fallback.

/// Upper bound on title length, in chars.
pub const MAX_TITLE_CHARS: usize = 50;

const TITLE_WORD_LIMIT: usize = 8;
const TRUNCATION_SUFFIX: &str = "...";

/// Builds a short title from the first words of `normalized`.
///
/// Falls back to `file_name` without its extension (text before the first
/// `.`) when the text yields no words. Both paths are clamped to
/// [`MAX_TITLE_CHARS`].
pub fn derive_title(normalized: &str, file_name: &str) -> String {
    let leading_words = normalized
        .split_whitespace()
        .take(TITLE_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");
    if !leading_words.is_empty() {
        return clamp_title(&leading_words);
    }

    clamp_title(file_stem(file_name))
}

fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or_default()
}

fn clamp_title(value: &str) -> String {
    if value.chars().count() <= MAX_TITLE_CHARS {
        return value.to_string();
    }
    let keep = MAX_TITLE_CHARS - TRUNCATION_SUFFIX.len();
    let mut clamped = value.chars().take(keep).collect::<String>();
    clamped.push_str(TRUNCATION_SUFFIX);
    clamped
}
