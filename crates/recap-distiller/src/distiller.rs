//! Core Distiller implementation

use crate::categorize::{categorize_key_points, redistribute_if_collapsed};
use crate::chunking::WordChunker;
use crate::config::DistillerConfig;
use crate::error::DistillerError;
use crate::format::render_outline;
use crate::types::{DistillMetadata, DistillOutcome, SkippedChunk};
use recap_domain::traits::Summarize;
use recap_domain::Outline;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Distiller turns raw text into a bucketed summary
///
/// One invocation drives one sequential pass: chunking, per-chunk
/// summarization through the injected capability, keyword categorization,
/// fallback redistribution, and formatting. The capability handle is owned by
/// the host and shared by reference; the distiller never constructs or caches
/// it.
///
/// Chunk summarization is independent per chunk and could run concurrently;
/// any such optimization must reassemble results in chunk index order, since
/// bucket insertion order is part of the output contract.
pub struct Distiller<S>
where
    S: Summarize,
{
    capability: Arc<S>,
    config: DistillerConfig,
    model_name: String,
}

impl<S> Distiller<S>
where
    S: Summarize + Send + Sync + 'static,
    S::Error: std::fmt::Display,
{
    /// Create a new Distiller around a host-owned capability
    pub fn new(capability: Arc<S>, config: DistillerConfig) -> Self {
        Self {
            capability,
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new Distiller with a specific model name in the metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Distill `text` into a bucketed summary
    pub async fn distill(&self, text: &str) -> Result<DistillOutcome, DistillerError> {
        self.distill_with_progress(text, |_| {}).await
    }

    /// Distill `text`, reporting fractional completion after each chunk
    ///
    /// The callback receives `(index + 1) / total` and is advisory only —
    /// suitable for a progress indicator, not a correctness contract. A
    /// failed or timed-out chunk is recorded as a skip and the pass
    /// continues; no single chunk failure aborts the run.
    pub async fn distill_with_progress<F>(
        &self,
        text: &str,
        mut on_progress: F,
    ) -> Result<DistillOutcome, DistillerError>
    where
        F: FnMut(f32),
    {
        let start_time = SystemTime::now();

        let chunker = WordChunker::new(self.config.max_chunk_words);
        let chunks = chunker.chunk(text);
        if chunks.is_empty() {
            return Err(DistillerError::NoUsableText);
        }

        let total = chunks.len();
        info!("Starting distillation: {} words, {} chunks", text.split_whitespace().count(), total);

        let mut outline = Outline::new();
        let mut skipped = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("Summarizing chunk {}/{}", idx + 1, total);

            match self.summarize_chunk(chunk).await {
                Ok(summary) => {
                    debug!("Chunk summary length: {} chars", summary.len());
                    outline.merge(categorize_key_points(&summary));
                }
                Err(e) => {
                    warn!("Skipping chunk {}: {}", idx, e);
                    skipped.push(SkippedChunk {
                        index: idx,
                        reason: e.to_string(),
                    });
                }
            }

            on_progress((idx + 1) as f32 / total as f32);
        }

        let fallback_applied = redistribute_if_collapsed(&mut outline);
        if fallback_applied {
            info!("Keyword categorization collapsed; redistributed sentences by position");
        }

        let rendered = render_outline(&outline);

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        let chunks_summarized = total - skipped.len();
        info!(
            "Distillation complete: {}/{} chunks summarized, {} buckets populated",
            chunks_summarized,
            total,
            outline.non_empty_buckets()
        );

        Ok(DistillOutcome {
            outline,
            rendered,
            fallback_applied,
            skipped,
            metadata: DistillMetadata {
                chunks_total: total,
                chunks_summarized,
                model_name: self.model_name.clone(),
                processing_time_ms,
            },
        })
    }

    /// Summarize a single chunk under the configured timeout
    async fn summarize_chunk(&self, chunk: &str) -> Result<String, DistillerError> {
        let word_count = chunk.split_whitespace().count();
        let (max_len, min_len) = self.config.length_budget(word_count);

        let capability = Arc::clone(&self.capability);
        let chunk = chunk.to_string();

        // The capability trait is synchronous; run it off the async thread
        let call = tokio::task::spawn_blocking(move || {
            capability
                .summarize(&chunk, max_len, min_len)
                .map_err(|e| DistillerError::Capability(e.to_string()))
        });

        timeout(self.config.call_timeout(), call)
            .await
            .map_err(|_| DistillerError::Timeout)?
            .map_err(|e| DistillerError::Capability(format!("Task join error: {}", e)))?
    }
}
