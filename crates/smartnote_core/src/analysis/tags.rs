//! Tag generation from detected subject and present keywords.

use crate::lexicon::Lexicon;

/// Upper bound on tags per note.
pub const MAX_TAGS: usize = 6;

/// Builds ordered, de-duplicated tags for a note.
///
/// The lower-cased subject always comes first, followed by the subject's
/// keywords that occur (case-insensitively) anywhere in the text, in
/// declaration order.
pub fn generate_tags(normalized: &str, subject: &str, lexicon: &Lexicon) -> Vec<String> {
    let text_lower = normalized.to_lowercase();
    let mut tags = vec![subject.to_lowercase()];

    for keyword in lexicon.keywords_for(subject).unwrap_or_default() {
        if tags.len() >= MAX_TAGS {
            break;
        }
        if tags.contains(keyword) {
            continue;
        }
        if text_lower.contains(keyword.to_lowercase().as_str()) {
            tags.push(keyword.clone());
        }
    }

    tags
}
