//! Recap Flashcards
//!
//! Selects answer-worthy sentences from raw text and turns them into
//! question/answer flashcards through an injected question-generation
//! capability.
//!
//! # Policy
//!
//! - Only sentences with more than seven words qualify as answers
//! - Each question is generated with a fixed prompt prefix and a bounded
//!   token budget, decoded deterministically
//! - Questions under four words are discarded as degenerate
//! - Answers are always verbatim source sentences, never paraphrased
//! - A capability failure on one sentence skips that sentence; it never
//!   aborts the batch. Returning fewer cards than requested (including none)
//!   is a normal outcome.
//!
//! # Example Usage
//!
//! ```
//! use recap_cards::{CardGenerator, CardsConfig};
//! use recap_llm::MockCapability;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let capability = Arc::new(MockCapability::new(
//!     "question: What does the nightly scheduler do?",
//! ));
//! let generator = CardGenerator::new(capability, CardsConfig::default());
//!
//! let cards = generator.generate("some source text ...").await;
//! for card in &cards {
//!     println!("Q: {}  A: {}", card.question, card.answer);
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;

#[cfg(test)]
mod tests;

pub use config::CardsConfig;
pub use error::CardsError;
pub use generator::CardGenerator;
