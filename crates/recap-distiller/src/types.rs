//! Result types for distillation

use recap_domain::Outline;

/// Result of one distillation run
#[derive(Debug, Clone)]
pub struct DistillOutcome {
    /// Bucketed key points accumulated across all chunks
    pub outline: Outline,

    /// Final rendered summary text
    pub rendered: String,

    /// Whether positional redistribution ran (categorization had collapsed)
    pub fallback_applied: bool,

    /// Chunks that were skipped, with reasons
    pub skipped: Vec<SkippedChunk>,

    /// Metadata about the run
    pub metadata: DistillMetadata,
}

/// A chunk whose summarization failed and was skipped
#[derive(Debug, Clone)]
pub struct SkippedChunk {
    /// Zero-based chunk index
    pub index: usize,

    /// Reason for the skip
    pub reason: String,
}

/// Metadata about a distillation run
#[derive(Debug, Clone)]
pub struct DistillMetadata {
    /// Total number of chunks the input split into
    pub chunks_total: usize,

    /// Chunks successfully summarized
    pub chunks_summarized: usize,

    /// Name of the model used
    pub model_name: String,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
