//! Flashcard module - question/answer study pairs

use serde::{Deserialize, Serialize};

/// A generated question paired with its source sentence
///
/// The answer is always a verbatim sentence from the input text, never a
/// paraphrase; the question is produced by the question-generation
/// capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Generated question text
    pub question: String,

    /// Verbatim source sentence answering the question
    pub answer: String,
}

impl Flashcard {
    /// Create a new flashcard
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Word count of the question (used by the quality filter)
    pub fn question_word_count(&self) -> usize {
        self.question.split_whitespace().count()
    }
}
