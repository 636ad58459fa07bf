//! Extracted-text cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_CHAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s.,!?;:()\-]").expect("valid disallowed char regex")
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Cleans raw extracted text for analysis.
///
/// Rules:
/// - drop every char outside ASCII word chars, whitespace and `.,!?;:()-`;
/// - collapse whitespace runs to one space;
/// - trim both ends.
///
/// Filtering runs before collapsing so that removed symbols between spaces
/// cannot leave a double space behind, which keeps the function idempotent.
pub fn normalize(raw: &str) -> String {
    let filtered = DISALLOWED_CHAR_RE.replace_all(raw, "");
    let collapsed = WHITESPACE_RE.replace_all(&filtered, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  Cells\n\n divide\t quickly  "), "Cells divide quickly");
    }

    #[test]
    fn strips_symbols_outside_safe_set() {
        assert_eq!(
            normalize("E = mc^2 (energy) -- see: p.4! #physics @home"),
            "E mc2 (energy) -- see: p.4! physics home"
        );
    }

    #[test]
    fn drops_non_ascii_word_chars() {
        assert_eq!(normalize("café naïve"), "caf nave");
    }

    #[test]
    fn is_idempotent_on_symbol_gaps() {
        let samples = [
            "a @ b",
            "  ## Heading ##\n\n* item one\n* item two",
            "\u{00a0}tab\tand\u{2003}em space",
            "",
            "!!! ??? ...",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "sample: {sample:?}");
        }
        assert_eq!(normalize("a @ b"), "a b");
    }

    #[test]
    fn empty_and_blank_inputs_yield_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("@#$%"), "");
    }
}
