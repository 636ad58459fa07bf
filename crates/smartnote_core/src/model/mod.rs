//! Domain model for organized notes.
//!
//! # Responsibility
//! - Define the input record handed over by extraction collaborators.
//! - Define the structured note produced by the organizer pipeline.
//!
//! # Invariants
//! - A `Note` is created once per `SourceDocument` and never mutated after.
//! - `Note` serializes to the flat record consumed by downstream renderers.

pub mod note;
