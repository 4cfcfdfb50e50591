//! Recap Ingest
//!
//! Input-quality checks applied before text enters the pipeline: whitespace
//! cleanup, transcript quality validation, and video URL parsing.
//!
//! Extraction itself (PDF, OCR, transcript download) happens in host
//! collaborators behind the `recap-domain` `ExtractText` trait; this crate
//! only decides whether what came back is worth distilling. Failures are
//! typed values whose `Display` text is the user-facing notice — the host
//! renders them instead of aborting the session.

#![warn(missing_docs)]

mod error;
mod transcript;

pub use error::IngestError;
pub use transcript::{clean_text, parse_video_id, validate_transcript, MIN_TRANSCRIPT_WORDS};
