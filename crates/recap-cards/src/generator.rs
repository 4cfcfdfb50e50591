//! Flashcard generation loop

use crate::config::CardsConfig;
use crate::error::CardsError;
use recap_domain::traits::GenerateQuestion;
use recap_domain::{split_sentences, word_count, Flashcard};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Prompt prefix expected by prepend-style question-generation models
const QUESTION_PROMPT_PREFIX: &str = "generate question: ";

/// Label some backends echo ahead of the generated question
const QUESTION_LABEL: &str = "question:";

/// Generates question/answer flashcards from raw text
pub struct CardGenerator<Q>
where
    Q: GenerateQuestion,
{
    capability: Arc<Q>,
    config: CardsConfig,
}

impl<Q> CardGenerator<Q>
where
    Q: GenerateQuestion + Send + Sync + 'static,
    Q::Error: std::fmt::Display,
{
    /// Create a new generator around a host-owned capability
    pub fn new(capability: Arc<Q>, config: CardsConfig) -> Self {
        Self { capability, config }
    }

    /// Generate flashcards from `text`
    ///
    /// Candidates are taken in document order until the card cap is reached
    /// or the sentence pool is exhausted. Zero qualifying sentences simply
    /// produce an empty result.
    pub async fn generate(&self, text: &str) -> Vec<Flashcard> {
        let sentences = split_sentences(text, self.config.min_sentence_words);
        debug!("{} candidate sentences for flashcards", sentences.len());

        let mut cards = Vec::new();

        for sentence in sentences {
            if cards.len() >= self.config.max_cards {
                break;
            }

            match self.ask(&sentence).await {
                Ok(Some(question)) => {
                    cards.push(Flashcard::new(question, sentence));
                }
                Ok(None) => {
                    debug!("Discarded degenerate question for: {}", sentence);
                }
                Err(e) => {
                    warn!("Question generation failed, skipping sentence: {}", e);
                }
            }
        }

        info!("Generated {} flashcards", cards.len());
        cards
    }

    /// Generate one question, or None if it fails the quality filter
    async fn ask(&self, sentence: &str) -> Result<Option<String>, CardsError> {
        let prompt = format!("{}{}", QUESTION_PROMPT_PREFIX, sentence);

        let capability = Arc::clone(&self.capability);
        let max_new_tokens = self.config.max_new_tokens;

        // The capability trait is synchronous; run it off the async thread
        let call = tokio::task::spawn_blocking(move || {
            capability
                .generate(&prompt, max_new_tokens)
                .map_err(|e| CardsError::Capability(e.to_string()))
        });

        let raw = timeout(self.config.call_timeout(), call)
            .await
            .map_err(|_| CardsError::Timeout)?
            .map_err(|e| CardsError::Capability(format!("Task join error: {}", e)))??;

        let question = strip_label(&raw);
        if word_count(&question) < self.config.min_question_words {
            return Ok(None);
        }

        Ok(Some(question))
    }
}

/// Strip a leading `question:` label if the backend echoed one
fn strip_label(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(QUESTION_LABEL)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_label_present() {
        assert_eq!(
            strip_label("question: What is the cache for?"),
            "What is the cache for?"
        );
    }

    #[test]
    fn test_strip_label_absent() {
        assert_eq!(strip_label("  What is the cache for?  "), "What is the cache for?");
    }
}
