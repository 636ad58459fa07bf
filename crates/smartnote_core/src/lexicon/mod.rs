//! Subject keyword lexicon.
//!
//! # Responsibility
//! - Own the ordered subject -> keywords table used by classification and
//!   tag generation.
//! - Validate custom lexicons before they reach the pipeline.
//!
//! # Invariants
//! - Entry order is declaration order and decides classification tie-breaks.
//! - Subject names are unique and non-blank.
//! - Every entry has at least one non-blank keyword.

pub mod keyword_table;

pub use keyword_table::{builtin_lexicon, Lexicon, LexiconEntry, LexiconError};
