//! Error types for the Distiller

use thiserror::Error;

/// Errors that can occur during distillation
#[derive(Error, Debug)]
pub enum DistillerError {
    /// Summarization capability error
    #[error("Capability error: {0}")]
    Capability(String),

    /// A summarization call exceeded its timeout
    #[error("Summarization timeout")]
    Timeout,

    /// Input contained no usable text
    #[error("No usable text in input")]
    NoUsableText,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
