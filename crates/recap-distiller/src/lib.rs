//! Recap Distiller
//!
//! Turns long-form raw text into a structured, bucketed bullet summary using
//! an injected abstractive-summarization capability.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → Summarize capability → Categorizer → Fallback → Formatter
//! ```
//!
//! # Key Features
//!
//! - **Bounded chunking**: non-overlapping word windows sized for a
//!   length-limited summarization backend
//! - **Adaptive length budgets**: requested summary length scales with chunk
//!   size
//! - **Keyword categorization**: summary sentences sorted into five fixed
//!   semantic buckets, first match wins
//! - **Collapse fallback**: positional redistribution when categorization
//!   degenerates onto a single bucket
//! - **Failure isolation**: a failed or timed-out chunk is skipped and
//!   recorded, never fatal
//!
//! # Example Usage
//!
//! ```
//! use recap_distiller::{Distiller, DistillerConfig};
//! use recap_llm::MockCapability;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let capability = Arc::new(MockCapability::new(
//!     "This overview explains the system architecture in detail.",
//! ));
//! let distiller = Distiller::new(capability, DistillerConfig::default());
//!
//! let outcome = distiller.distill("some long input text ...").await?;
//!
//! println!("{}", outcome.rendered);
//! println!("skipped {} chunks", outcome.skipped.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod categorize;
mod chunking;
mod config;
mod distiller;
mod error;
mod format;
mod types;

#[cfg(test)]
mod tests;

pub use categorize::{categorize_key_points, redistribute_if_collapsed, MIN_KEY_POINT_WORDS};
pub use chunking::WordChunker;
pub use config::DistillerConfig;
pub use distiller::Distiller;
pub use error::DistillerError;
pub use format::render_outline;
pub use types::{DistillMetadata, DistillOutcome, SkippedChunk};
