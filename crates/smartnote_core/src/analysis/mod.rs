//! Text analysis stages of the organizer pipeline.
//!
//! # Responsibility
//! - Normalize extracted text before any decision logic runs.
//! - Classify subject, select key points, derive title/tags/date.
//!
//! # Invariants
//! - Every stage is a total, pure function over its inputs.
//! - Stages read the lexicon in declaration order only.

pub mod classify;
pub mod date;
pub mod normalize;
pub mod summary;
pub mod tags;
pub mod title;

pub use classify::{classify, subject_scores};
pub use date::estimate_date;
pub use normalize::normalize;
pub use summary::extract_key_points;
pub use tags::generate_tags;
pub use title::derive_title;
