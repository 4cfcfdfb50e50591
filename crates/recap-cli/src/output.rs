//! Terminal output for the three artifacts.

use colored::Colorize;
use recap_distiller::DistillOutcome;
use recap_domain::{Bucket, Flashcard};

/// Print the rendered summary, noting skipped chunks if any.
pub fn print_summary(outcome: &DistillOutcome) {
    println!("{}", "Summary".cyan().bold());
    println!();

    if outcome.rendered.is_empty() {
        println!("{}", "(no summary could be produced)".dimmed());
    } else {
        for line in outcome.rendered.lines() {
            if Bucket::ALL.iter().any(|b| b.title() == line) {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }

    if !outcome.skipped.is_empty() {
        eprintln!(
            "{}",
            format!(
                "note: {} of {} chunks could not be summarized",
                outcome.skipped.len(),
                outcome.metadata.chunks_total
            )
            .yellow()
        );
    }
    println!();
}

/// Print flowchart steps as a numbered list.
pub fn print_flowchart(steps: &[String]) {
    println!("{}", "Concept Flowchart".cyan().bold());
    println!();

    if steps.is_empty() {
        println!("{}", "(no steps extracted)".dimmed());
    }
    for (i, step) in steps.iter().enumerate() {
        println!("{:>2}. {}", i + 1, step);
    }
    println!();
}

/// Print flashcards as question/answer pairs.
pub fn print_cards(cards: &[Flashcard]) {
    println!("{}", "Q/A Flashcards".cyan().bold());
    println!();

    if cards.is_empty() {
        println!("{}", "(no flashcards generated)".dimmed());
    }
    for (i, card) in cards.iter().enumerate() {
        println!("{} {}", format!("Q{}:", i + 1).bold(), card.question);
        println!("    {}", card.answer);
    }
    println!();
}
