//! Integration tests for flashcard generation

#[cfg(test)]
mod tests {
    use crate::{CardGenerator, CardsConfig};
    use recap_llm::MockCapability;
    use std::sync::Arc;

    const TEXT: &str = "The scheduler runs the nightly backup at exactly two in the morning. \
                        The database compacts its segments after every large deletion completes. \
                        Replication lag stays below two seconds during normal weekday operation.";

    fn prompt_for(sentence: &str) -> String {
        format!("generate question: {}", sentence)
    }

    #[tokio::test]
    async fn test_generates_cards_with_verbatim_answers() {
        let mut capability = MockCapability::default();
        capability.add_response(
            prompt_for("The scheduler runs the nightly backup at exactly two in the morning."),
            "question: When does the scheduler run the nightly backup?",
        );
        capability.add_response(
            prompt_for("The database compacts its segments after every large deletion completes."),
            "question: When does the database compact its segments?",
        );
        capability.add_response(
            prompt_for("Replication lag stays below two seconds during normal weekday operation."),
            "question: How large does replication lag get?",
        );

        let generator = CardGenerator::new(Arc::new(capability), CardsConfig::default());
        let cards = generator.generate(TEXT).await;

        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards[0].question,
            "When does the scheduler run the nightly backup?"
        );
        // Answer is the verbatim source sentence
        assert_eq!(
            cards[0].answer,
            "The scheduler runs the nightly backup at exactly two in the morning."
        );
    }

    #[tokio::test]
    async fn test_short_questions_are_discarded() {
        let mut capability = MockCapability::new("question: What else happens here daily?");
        capability.add_response(
            prompt_for("The scheduler runs the nightly backup at exactly two in the morning."),
            "question: Why?",
        );

        let generator = CardGenerator::new(Arc::new(capability), CardsConfig::default());
        let cards = generator.generate(TEXT).await;

        // The degenerate question is absent; the other two sentences survive
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.question_word_count() >= 4));
    }

    #[tokio::test]
    async fn test_capability_failure_skips_sentence_only() {
        let mut capability = MockCapability::new("question: What else happens here daily?");
        capability.add_error(prompt_for(
            "The database compacts its segments after every large deletion completes.",
        ));

        let generator = CardGenerator::new(Arc::new(capability), CardsConfig::default());
        let cards = generator.generate(TEXT).await;

        assert_eq!(cards.len(), 2);
        assert!(cards
            .iter()
            .all(|c| !c.answer.starts_with("The database compacts")));
    }

    #[tokio::test]
    async fn test_card_cap_stops_generation_early() {
        let capability = MockCapability::new("question: What does this sentence describe here?");
        let call_counter = capability.clone();

        let mut config = CardsConfig::default();
        config.max_cards = 2;

        let generator = CardGenerator::new(Arc::new(capability), config);
        let cards = generator.generate(TEXT).await;

        assert_eq!(cards.len(), 2);
        // No call is spent on sentences beyond the cap
        assert_eq!(call_counter.call_count(), 2);
    }

    #[tokio::test]
    async fn test_thin_sentences_produce_no_cards() {
        let capability = MockCapability::new("question: What does this sentence describe here?");
        let call_counter = capability.clone();

        let generator = CardGenerator::new(Arc::new(capability), CardsConfig::default());
        let cards = generator.generate("Short sentence here. Another tiny one.").await;

        assert!(cards.is_empty());
        assert_eq!(call_counter.call_count(), 0);
    }
}
