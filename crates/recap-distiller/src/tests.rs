//! Integration tests for the Distiller

#[cfg(test)]
mod tests {
    use crate::{Distiller, DistillerConfig, DistillerError};
    use recap_domain::Bucket;
    use recap_llm::MockCapability;
    use std::sync::Arc;

    const INPUT: &str = "Caching systems appear everywhere in modern infrastructure.";

    #[tokio::test]
    async fn test_keyword_bearing_summary_populates_three_buckets() {
        let mut capability = MockCapability::default();
        capability.add_response(
            INPUT,
            "This overview explains the caching system design. \
             The main idea is write-through caching everywhere. \
             For example, in practice this reduces request latency.",
        );

        let distiller = Distiller::new(Arc::new(capability), DistillerConfig::default());
        let outcome = distiller.distill(INPUT).await.unwrap();

        assert!(!outcome.fallback_applied);
        assert_eq!(outcome.outline.non_empty_buckets(), 3);
        assert_eq!(outcome.outline.get(Bucket::Highlights).len(), 1);
        assert_eq!(outcome.outline.get(Bucket::Ideas).len(), 1);
        assert_eq!(outcome.outline.get(Bucket::Practical).len(), 1);

        // Three sections, one bullet each
        let bullets = outcome
            .rendered
            .lines()
            .filter(|l| l.starts_with("• "))
            .count();
        assert_eq!(bullets, 3);
    }

    #[tokio::test]
    async fn test_generic_summary_triggers_fallback() {
        let generic = "The morning train leaves the station at seven. \
                       Workers load the crates onto the platform quickly. \
                       The signal turns green when the track is clear. \
                       Passengers wait behind the yellow line until boarding. \
                       The conductor checks every ticket before departure time. \
                       Freight cars travel overnight between the two cities. \
                       Maintenance crews inspect the rails twice each month. \
                       The last train returns to the depot after midnight.";

        let distiller = Distiller::new(
            Arc::new(MockCapability::new(generic)),
            DistillerConfig::default(),
        );
        let outcome = distiller.distill(INPUT).await.unwrap();

        assert!(outcome.fallback_applied);
        assert!(outcome.outline.non_empty_buckets() >= 4);

        // The takeaway is the last of the eight sentences
        assert_eq!(
            outcome.outline.get(Bucket::Takeaway),
            ["The last train returns to the depot after midnight."]
        );
        assert_eq!(
            outcome.rendered.lines().last().unwrap(),
            "The last train returns to the depot after midnight."
        );
    }

    #[tokio::test]
    async fn test_failed_chunk_is_skipped_not_fatal() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let mut capability = MockCapability::new(
            "The system processes records in stable sorted order.",
        );
        capability.add_error("alpha beta gamma delta epsilon");

        let mut config = DistillerConfig::default();
        config.max_chunk_words = 5; // Force two chunks

        let distiller = Distiller::new(Arc::new(capability), config);
        let outcome = distiller.distill(text).await.unwrap();

        assert_eq!(outcome.metadata.chunks_total, 2);
        assert_eq!(outcome.metadata.chunks_summarized, 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].index, 0);
        assert!(!outcome.outline.is_empty());
    }

    #[tokio::test]
    async fn test_all_chunks_failing_yields_empty_summary() {
        let mut capability = MockCapability::default();
        capability.add_error(INPUT);

        let distiller = Distiller::new(Arc::new(capability), DistillerConfig::default());
        let outcome = distiller.distill(INPUT).await.unwrap();

        assert_eq!(outcome.rendered, "");
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.outline.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let distiller = Distiller::new(
            Arc::new(MockCapability::default()),
            DistillerConfig::default(),
        );

        let result = distiller.distill("   \n  ").await;
        assert!(matches!(result, Err(DistillerError::NoUsableText)));
    }

    #[tokio::test]
    async fn test_progress_reports_fraction_per_chunk() {
        let text = "one two three four five six seven eight nine ten";
        let mut config = DistillerConfig::default();
        config.max_chunk_words = 5;

        let distiller = Distiller::new(Arc::new(MockCapability::default()), config);

        let mut fractions = Vec::new();
        distiller
            .distill_with_progress(text, |f| fractions.push(f))
            .await
            .unwrap();

        assert_eq!(fractions, vec![0.5, 1.0]);
    }

    #[tokio::test]
    async fn test_duplicate_sentences_across_chunks_deduplicate() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        // Both chunks summarize to the same generic sentence
        let capability =
            MockCapability::new("Every night the harbor lights stay on until dawn.");

        let mut config = DistillerConfig::default();
        config.max_chunk_words = 5;

        let distiller = Distiller::new(Arc::new(capability), config);
        let outcome = distiller.distill(text).await.unwrap();

        assert!(outcome.fallback_applied);
        assert_eq!(outcome.outline.sentences().len(), 1);
        assert_eq!(
            outcome.outline.get(Bucket::Takeaway),
            ["Every night the harbor lights stay on until dawn."]
        );
    }
}
