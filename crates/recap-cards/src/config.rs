//! Configuration for flashcard generation

use std::time::Duration;

/// Configuration for the card generator
#[derive(Debug, Clone)]
pub struct CardsConfig {
    /// Maximum number of flashcards to produce
    pub max_cards: usize,

    /// Minimum words for a sentence to qualify as an answer
    pub min_sentence_words: usize,

    /// Minimum words for a generated question to be kept
    pub min_question_words: usize,

    /// Token budget for each question-generation call
    pub max_new_tokens: usize,

    /// Maximum time for a single generation call (seconds)
    pub call_timeout_secs: u64,
}

impl CardsConfig {
    /// Get the per-call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cards == 0 {
            return Err("max_cards must be greater than 0".to_string());
        }
        if self.max_new_tokens == 0 {
            return Err("max_new_tokens must be greater than 0".to_string());
        }
        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            max_cards: 8,
            // Sentences of seven words or fewer are too thin to ask about
            min_sentence_words: 8,
            min_question_words: 4,
            max_new_tokens: 48,
            call_timeout_secs: 30,
        }
    }
}
