//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Recap - distill long-form text into a summary, flashcards, and a flowchart.
#[derive(Debug, Parser)]
#[command(name = "recap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file path, or '-' to read from stdin
    pub input: String,

    /// Ollama API endpoint
    #[arg(long, env = "RECAP_ENDPOINT", default_value = recap_llm::ollama::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model to generate with
    #[arg(short, long, env = "RECAP_MODEL", default_value = "llama2")]
    pub model: String,

    /// Maximum number of flashcards
    #[arg(long, default_value_t = 8)]
    pub max_cards: usize,

    /// Maximum number of flowchart steps
    #[arg(long, default_value_t = recap_flowchart::DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Words per summarization chunk
    #[arg(long)]
    pub chunk_words: Option<usize>,

    /// Per-call timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Validate the input as a video transcript before distilling
    #[arg(long)]
    pub transcript: bool,

    /// Write flashcards as JSON to this path
    #[arg(long)]
    pub cards_json: Option<PathBuf>,

    /// Write the flowchart DOT source to this path instead of listing steps
    #[arg(long)]
    pub dot: Option<PathBuf>,

    /// Skip flashcard generation
    #[arg(long)]
    pub no_cards: bool,

    /// Skip flowchart generation
    #[arg(long)]
    pub no_flowchart: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
