//! Recap CLI - distill a document into a summary, flashcards, and a flowchart.

mod cli;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use recap_cards::{CardGenerator, CardsConfig};
use recap_distiller::{Distiller, DistillerConfig};
use recap_domain::traits::{ExtractText, Translate};
use recap_flowchart::{extract_steps, render_dot, DotStyle};
use recap_ingest::{clean_text, validate_transcript};
use recap_llm::{OllamaProvider, PassthroughTranslator};
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let raw = LocalSource
        .extract(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input))?;
    let text = clean_text(&raw);

    if cli.transcript {
        validate_transcript(&text)?;
    } else if text.is_empty() {
        bail!("Please provide valid input content");
    }

    // Translation seam; the passthrough stand-in only handles
    // already-English content, a real MT backend drops in here
    let translator = PassthroughTranslator::new();
    let lang = translator.detect(&text)?;
    debug!("Detected language: {}", lang);
    let text = if lang == "en" {
        text
    } else {
        translator.translate(&text, &lang, "en")?
    };

    // One capability handle for the whole run, shared by reference
    let provider = Arc::new(OllamaProvider::new(&cli.endpoint, &cli.model));

    let mut config = DistillerConfig::default();
    if let Some(words) = cli.chunk_words {
        config.max_chunk_words = words;
    }
    if let Some(secs) = cli.timeout {
        config.call_timeout_secs = secs;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let distiller = Distiller::new(Arc::clone(&provider), config).with_model_name(&cli.model);

    let outcome = distiller
        .distill_with_progress(&text, |fraction| {
            eprint!("\rSummarizing... {:3.0}%", fraction * 100.0);
        })
        .await?;
    eprintln!();

    output::print_summary(&outcome);

    if !cli.no_flowchart {
        let steps = extract_steps(&text, cli.max_steps);
        match &cli.dot {
            Some(path) => {
                let dot = render_dot(&steps, &DotStyle::default());
                std::fs::write(path, dot)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Wrote flowchart DOT to {}", path.display());
            }
            None => output::print_flowchart(&steps),
        }
    }

    if !cli.no_cards {
        let cards_config = CardsConfig {
            max_cards: cli.max_cards,
            ..CardsConfig::default()
        };
        let generator = CardGenerator::new(Arc::clone(&provider), cards_config);
        let cards = generator.generate(&text).await;

        output::print_cards(&cards);

        if let Some(path) = &cli.cards_json {
            let json = serde_json::to_string_pretty(&cards)?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote flashcards JSON to {}", path.display());
        }
    }

    Ok(())
}

/// Text-extraction collaborator for local files and stdin.
struct LocalSource;

impl ExtractText for LocalSource {
    type Error = std::io::Error;

    fn extract(&self, source: &str) -> Result<String, Self::Error> {
        if source == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            std::fs::read_to_string(source)
        }
    }
}
