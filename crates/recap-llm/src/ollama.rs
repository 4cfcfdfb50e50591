//! Ollama Backend Implementation
//!
//! Provides the summarization and question-generation capabilities on top of
//! Ollama's local LLM API.
//!
//! # Features
//!
//! - Async HTTP communication with the Ollama API
//! - Configurable endpoint and model
//! - Deterministic decoding (temperature 0, bounded prediction budget)
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use recap_llm::OllamaProvider;
//!
//! // Create an Ollama provider
//! let provider = OllamaProvider::new("http://localhost:11434", "llama2");
//!
//! // Note: The raw generate method is async; the recap-domain trait impls
//! // wrap it for synchronous callers.
//! ```

use crate::CapabilityError;
use recap_domain::traits::{GenerateQuestion, Summarize};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for capability requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Ollama API provider for local LLM inference
///
/// One provider is constructed by the host and shared read-only across the
/// pipeline; each call is independent.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

/// Decoding options; temperature 0 keeps decoding deterministic
#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: i64,
}

/// Response from the Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama2", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider against `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Model name this provider generates with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text with a bounded token budget
    ///
    /// # Errors
    ///
    /// Returns an error if Ollama is not running, the model is not available,
    /// network communication fails, or the response format is invalid.
    pub async fn generate(
        &self,
        prompt: &str,
        num_predict: usize,
    ) -> Result<String, CapabilityError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: OllamaOptions {
                temperature: 0.0,
                num_predict: num_predict as i64,
            },
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        match response.json::<OllamaGenerateResponse>().await {
                            Ok(ollama_response) => {
                                return Ok(ollama_response.response);
                            }
                            Err(e) => {
                                return Err(CapabilityError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(CapabilityError::ModelNotAvailable(self.model.clone()));
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(CapabilityError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(CapabilityError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(CapabilityError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| CapabilityError::Communication("Max retries exceeded".to_string())))
    }

    /// Summarize `text` into roughly `min_words..=max_words` words
    pub async fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, CapabilityError> {
        let prompt = summary_prompt(text, max_words, min_words);
        // Words-to-tokens headroom for the prediction budget
        self.generate(&prompt, max_words * 2).await
    }
}

fn summary_prompt(text: &str, max_words: usize, min_words: usize) -> String {
    format!(
        "Summarize the following text in {} to {} words. \
         Respond with the summary only, no preamble.\n\n{}",
        min_words, max_words, text
    )
}

impl Summarize for OllamaProvider {
    type Error = CapabilityError;

    fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, Self::Error> {
        // Blocking wrapper for the async client
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.summarize(text, max_words, min_words).await })
    }
}

impl GenerateQuestion for OllamaProvider {
    type Error = CapabilityError;

    fn generate(&self, prompt: &str, max_new_tokens: usize) -> Result<String, Self::Error> {
        // Blocking wrapper for the async client
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate(prompt, max_new_tokens).await })
    }
}
