//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate analysis stages into use-case level APIs.
//! - Keep CLI/UI layers decoupled from pipeline details.

pub mod organizer_service;
