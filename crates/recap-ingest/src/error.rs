//! Error types for input-quality checks

use thiserror::Error;

/// Input-quality failures, worded for direct display to the user
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IngestError {
    /// No content at all
    #[error("No input content provided")]
    Empty,

    /// Content exists but is too short to distill
    #[error("Transcript too short or low quality")]
    TooShort,

    /// Content matches known junk markers (scraper artifacts, boilerplate)
    #[error("Content looks like boilerplate, not a transcript")]
    JunkContent,

    /// A video URL that no id could be extracted from
    #[error("Invalid video URL")]
    InvalidUrl,
}
