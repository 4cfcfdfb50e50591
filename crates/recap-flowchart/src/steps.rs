//! Flowchart step extraction

use recap_domain::split_sentences;

/// Default cap on the number of steps in a chart
pub const DEFAULT_MAX_STEPS: usize = 8;

/// Minimum words for a sentence to qualify as a step
///
/// Sentences of six words or fewer read as fragments inside a node.
pub const MIN_STEP_WORDS: usize = 7;

/// Extract up to `max_steps` step sentences from `text`, in document order
pub fn extract_steps(text: &str, max_steps: usize) -> Vec<String> {
    let mut steps = split_sentences(text, MIN_STEP_WORDS);
    steps.truncate(max_steps);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order_preserved() {
        let text = "First the loader validates the uploaded archive contents. \
                    Then the parser builds an index of every section. \
                    Finally the renderer writes the output files to disk.";
        let steps = extract_steps(text, 8);
        assert_eq!(steps.len(), 3);
        assert!(steps[0].starts_with("First"));
        assert!(steps[2].starts_with("Finally"));
    }

    #[test]
    fn test_cap_takes_the_first_steps() {
        let text = "Step one of the process happens right away here. \
                    Step two of the process happens immediately after that. \
                    Step three of the process happens at the very end.";
        let steps = extract_steps(text, 2);
        assert_eq!(steps.len(), 2);
        assert!(steps[1].starts_with("Step two"));
    }

    #[test]
    fn test_short_sentences_are_not_steps() {
        let steps = extract_steps("Too short. This sentence is long enough to become a step.", 8);
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_empty_text_yields_no_steps() {
        assert!(extract_steps("", 8).is_empty());
    }
}
