//! Recap Capability Layer
//!
//! Pluggable implementations of the generative-model capabilities the
//! pipeline consumes through the `recap-domain` traits.
//!
//! # Backends
//!
//! - `MockCapability`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `PassthroughTranslator`: Identity translation for already-target-language
//!   content
//!
//! A capability handle is constructed once by the host, is read-only after
//! initialization, and may be shared across sessions behind an `Arc`; every
//! call is independent and stateless.
//!
//! # Examples
//!
//! ```
//! use recap_llm::MockCapability;
//! use recap_domain::traits::Summarize;
//!
//! let capability = MockCapability::new("A short summary.");
//! let result = capability.summarize("long input text", 160, 50).unwrap();
//! assert_eq!(result, "A short summary.");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use recap_domain::traits::{GenerateQuestion, Summarize, Translate};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during capability calls
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Capability error: {0}")]
    Other(String),
}

/// Mock capability for deterministic testing
///
/// Returns pre-configured responses without making any network calls. The
/// summarization key is the input text; the question-generation key is the
/// prompt.
///
/// # Examples
///
/// ```
/// use recap_llm::MockCapability;
/// use recap_domain::traits::GenerateQuestion;
///
/// let mut capability = MockCapability::default();
/// capability.add_response("generate question: The sky is blue.", "question: Why is the sky blue?");
/// let out = capability.generate("generate question: The sky is blue.", 48).unwrap();
/// assert_eq!(out, "question: Why is the sky blue?");
/// ```
#[derive(Debug, Clone)]
pub struct MockCapability {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockCapability {
    /// Create a mock with a fixed response for all inputs
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given input text or prompt
    pub fn add_response(&mut self, input: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(input.into(), response.into());
    }

    /// Configure an error for a specific input
    pub fn add_error(&mut self, input: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(input.into(), "ERROR".to_string());
    }

    /// Number of capability calls made so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    fn lookup(&self, key: &str) -> Result<String, CapabilityError> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(key) {
            if response == "ERROR" {
                return Err(CapabilityError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

impl Default for MockCapability {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl Summarize for MockCapability {
    type Error = CapabilityError;

    fn summarize(
        &self,
        text: &str,
        _max_words: usize,
        _min_words: usize,
    ) -> Result<String, Self::Error> {
        self.lookup(text)
    }
}

impl GenerateQuestion for MockCapability {
    type Error = CapabilityError;

    fn generate(&self, prompt: &str, _max_new_tokens: usize) -> Result<String, Self::Error> {
        self.lookup(prompt)
    }
}

/// Identity translator for content already in the target language
///
/// Real machine-translation backends are host collaborators; this stand-in
/// keeps the `Translate` seam wired for hosts that only handle one language.
#[derive(Debug, Clone, Default)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    /// Create a new passthrough translator
    pub fn new() -> Self {
        Self
    }
}

impl Translate for PassthroughTranslator {
    type Error = CapabilityError;

    fn detect(&self, _text: &str) -> Result<String, Self::Error> {
        Ok("en".to_string())
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, Self::Error> {
        if source == target {
            Ok(text.to_string())
        } else {
            Err(CapabilityError::Other(format!(
                "no translation backend configured for {} -> {}",
                source, target
            )))
        }
    }
}
