//! Configuration for the Distiller

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Distiller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistillerConfig {
    /// Maximum words per chunk sent to the summarization capability
    pub max_chunk_words: usize,

    /// Upper bound on a requested chunk-summary length (words)
    pub summary_ceiling_words: usize,

    /// Lower bound on a requested chunk-summary length (words)
    pub summary_floor_words: usize,

    /// Floor for the minimum requested summary length (words)
    pub summary_min_floor_words: usize,

    /// Maximum time for a single summarization call (seconds)
    pub call_timeout_secs: u64,
}

impl DistillerConfig {
    /// Get the per-call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Length budget for a chunk of `word_count` words
    ///
    /// Scales the requested summary length with input length so short chunks
    /// are not padded and long chunks are not truncated arbitrarily. Returns
    /// `(max_len, min_len)` in words.
    pub fn length_budget(&self, word_count: usize) -> (usize, usize) {
        let max_len = self
            .summary_ceiling_words
            .min(self.summary_floor_words.max(word_count / 2));
        let min_len = self.summary_min_floor_words.max(max_len / 2);
        (max_len, min_len)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_words == 0 {
            return Err("max_chunk_words must be greater than 0".to_string());
        }
        if self.summary_floor_words == 0 {
            return Err("summary_floor_words must be greater than 0".to_string());
        }
        if self.summary_floor_words > self.summary_ceiling_words {
            return Err("summary_floor_words cannot exceed summary_ceiling_words".to_string());
        }
        if self.summary_min_floor_words > self.summary_floor_words {
            return Err("summary_min_floor_words cannot exceed summary_floor_words".to_string());
        }
        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Brisk preset: smaller chunks and shorter timeouts for quick passes
    pub fn brisk() -> Self {
        Self {
            max_chunk_words: 300,
            call_timeout_secs: 20,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for DistillerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_chunk_words: 600,
            summary_ceiling_words: 160,
            summary_floor_words: 70,
            summary_min_floor_words: 50,
            call_timeout_secs: 60,
        }
    }
}
