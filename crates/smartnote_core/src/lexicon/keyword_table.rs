//! Lexicon data model, built-in table and JSON loading.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BUILTIN_TABLE: &[(&str, &[&str])] = &[
    (
        "Math",
        &[
            "equation",
            "formula",
            "theorem",
            "calculate",
            "algebra",
            "geometry",
            "calculus",
            "derivative",
            "integral",
            "logarithm",
            "trigonometry",
            "matrix",
            "vector",
            "polynomial",
            "function",
        ],
    ),
    (
        "Physics",
        &[
            "force",
            "energy",
            "momentum",
            "velocity",
            "acceleration",
            "gravity",
            "quantum",
            "wave",
            "frequency",
            "amplitude",
            "electromagnetic",
            "thermodynamics",
            "mechanics",
            "optics",
        ],
    ),
    (
        "Chemistry",
        &[
            "molecule",
            "atom",
            "element",
            "compound",
            "reaction",
            "bond",
            "periodic",
            "acid",
            "base",
            "oxidation",
            "reduction",
            "catalyst",
            "solution",
            "concentration",
        ],
    ),
    (
        "Biology",
        &[
            "cell",
            "organism",
            "evolution",
            "genetics",
            "DNA",
            "protein",
            "enzyme",
            "metabolism",
            "photosynthesis",
            "ecosystem",
            "species",
            "anatomy",
            "physiology",
        ],
    ),
    (
        "History",
        &[
            "war",
            "revolution",
            "empire",
            "civilization",
            "century",
            "ancient",
            "medieval",
            "renaissance",
            "industrial",
            "democracy",
            "treaty",
            "colonialism",
        ],
    ),
    (
        "Literature",
        &[
            "character",
            "plot",
            "theme",
            "metaphor",
            "symbolism",
            "narrative",
            "author",
            "novel",
            "poetry",
            "drama",
            "literary",
            "analysis",
        ],
    ),
    (
        "Computer Science",
        &[
            "algorithm",
            "data structure",
            "programming",
            "software",
            "hardware",
            "database",
            "network",
            "binary",
            "recursion",
            "complexity",
            "debugging",
            "API",
        ],
    ),
    (
        "Economics",
        &[
            "market",
            "supply",
            "demand",
            "inflation",
            "GDP",
            "recession",
            "investment",
            "profit",
            "revenue",
            "competition",
            "monopoly",
            "fiscal",
        ],
    ),
    (
        "Psychology",
        &[
            "behavior",
            "cognitive",
            "learning",
            "memory",
            "perception",
            "personality",
            "therapy",
            "mental health",
            "development",
            "social psychology",
        ],
    ),
];

static BUILTIN_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    entries: BUILTIN_TABLE
        .iter()
        .map(|(subject, keywords)| LexiconEntry {
            subject: (*subject).to_string(),
            keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
        })
        .collect(),
});

/// Returns the lexicon shipped with the system.
pub fn builtin_lexicon() -> &'static Lexicon {
    &BUILTIN_LEXICON
}

/// Lexicon construction/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// Lexicon declares no subjects at all.
    Empty,
    BlankSubject,
    DuplicateSubject(String),
    /// Subject has an empty keyword list.
    EmptyKeywords(String),
    /// Subject declares a blank keyword, which would match everywhere.
    BlankKeyword(String),
    /// JSON source could not be decoded.
    Parse(String),
}

impl Display for LexiconError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "lexicon must declare at least one subject"),
            Self::BlankSubject => write!(f, "lexicon subject name cannot be blank"),
            Self::DuplicateSubject(subject) => {
                write!(f, "lexicon subject declared more than once: `{subject}`")
            }
            Self::EmptyKeywords(subject) => {
                write!(f, "lexicon subject `{subject}` has no keywords")
            }
            Self::BlankKeyword(subject) => {
                write!(f, "lexicon subject `{subject}` has a blank keyword")
            }
            Self::Parse(message) => write!(f, "invalid lexicon json: {message}"),
        }
    }
}

impl Error for LexiconError {}

/// One subject with its ordered keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub subject: String,
    pub keywords: Vec<String>,
}

impl LexiconEntry {
    pub fn new<S, K>(subject: S, keywords: K) -> Self
    where
        S: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            subject: subject.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable ordered subject table.
///
/// Constructed once and shared read-only by every pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Builds a validated lexicon, keeping the given declaration order.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    /// Returns a clone of the built-in lexicon.
    pub fn builtin() -> Self {
        builtin_lexicon().clone()
    }

    /// Parses a lexicon from a JSON array of `{subject, keywords}` records.
    ///
    /// An array is required (not an object) so declaration order survives
    /// decoding.
    pub fn from_json_str(source: &str) -> Result<Self, LexiconError> {
        let entries: Vec<LexiconEntry> =
            serde_json::from_str(source).map_err(|err| LexiconError::Parse(err.to_string()))?;
        Self::new(entries)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Looks up keywords for an exact subject name.
    pub fn keywords_for(&self, subject: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.subject == subject)
            .map(|entry| entry.keywords.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entries(entries: &[LexiconEntry]) -> Result<(), LexiconError> {
    if entries.is_empty() {
        return Err(LexiconError::Empty);
    }

    let mut seen = BTreeSet::<&str>::new();
    for entry in entries {
        if entry.subject.trim().is_empty() {
            return Err(LexiconError::BlankSubject);
        }
        if !seen.insert(entry.subject.as_str()) {
            return Err(LexiconError::DuplicateSubject(entry.subject.clone()));
        }
        if entry.keywords.is_empty() {
            return Err(LexiconError::EmptyKeywords(entry.subject.clone()));
        }
        if entry.keywords.iter().any(|kw| kw.trim().is_empty()) {
            return Err(LexiconError::BlankKeyword(entry.subject.clone()));
        }
    }
    Ok(())
}
