//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between the pipeline and the external
//! generative/translation/extraction collaborators. Implementations live in
//! other crates (`recap-llm`) or in the host application. Capabilities are
//! constructed once by the host and passed into the pipeline by reference;
//! the pipeline never constructs or globally caches them itself.

/// Abstractive summarization capability
///
/// Implementations must decode deterministically (no sampling) so repeated
/// runs over the same input produce the same summary.
pub trait Summarize {
    /// Error type for summarization calls
    type Error;

    /// Summarize `text` into roughly `min_words..=max_words` words
    fn summarize(&self, text: &str, max_words: usize, min_words: usize)
        -> Result<String, Self::Error>;
}

/// Question-generation capability
///
/// Implementations must decode deterministically (no sampling). Each call is
/// independent and stateless from the pipeline's perspective.
pub trait GenerateQuestion {
    /// Error type for generation calls
    type Error;

    /// Generate text from `prompt`, producing at most `max_new_tokens` tokens
    fn generate(&self, prompt: &str, max_new_tokens: usize) -> Result<String, Self::Error>;
}

/// Translation capability
pub trait Translate {
    /// Error type for translation calls
    type Error;

    /// Detect the language of `text`, returning an ISO 639-1 code
    fn detect(&self, text: &str) -> Result<String, Self::Error>;

    /// Translate `text` from `source` to `target` language
    fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, Self::Error>;
}

/// Text-extraction capability (PDF, image OCR, video transcript)
///
/// The pipeline treats the output as opaque raw text; it does not distinguish
/// extraction failures from genuinely short content beyond length checks.
pub trait ExtractText {
    /// Error type for extraction
    type Error;

    /// Extract plain text from `source` (a path, URL, or handle)
    fn extract(&self, source: &str) -> Result<String, Self::Error>;
}
