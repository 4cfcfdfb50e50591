//! Error types for flashcard generation
//!
//! These errors stay internal to the batch loop: a per-sentence failure is
//! logged and the sentence skipped, so the public API never surfaces them.

use thiserror::Error;

/// Errors that can occur on a single question-generation call
#[derive(Error, Debug)]
pub enum CardsError {
    /// Question-generation capability error
    #[error("Capability error: {0}")]
    Capability(String),

    /// A generation call exceeded its timeout
    #[error("Question generation timeout")]
    Timeout,
}
