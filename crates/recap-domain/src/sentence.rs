//! Sentence splitting for raw text and chunk summaries

/// Split `text` into trimmed sentences, keeping terminal punctuation attached
///
/// A sentence boundary is terminal punctuation (`.`, `!`, `?`) followed by
/// whitespace. Sentences with fewer than `min_words` words are dropped —
/// this removes fragments and headers. Empty input yields an empty sequence.
pub fn split_sentences(text: &str, min_words: usize) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut after_terminal = false;

    for ch in text.chars() {
        if after_terminal && ch.is_whitespace() {
            push_candidate(&mut sentences, &current, min_words);
            current.clear();
            after_terminal = false;
            continue;
        }
        current.push(ch);
        after_terminal = matches!(ch, '.' | '!' | '?');
    }
    push_candidate(&mut sentences, &current, min_words);

    sentences
}

/// Number of whitespace-separated words in `s`
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

fn push_candidate(sentences: &mut Vec<String>, candidate: &str, min_words: usize) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() && word_count(trimmed) >= min_words {
        sentences.push(trimmed.to_string());
    }
}
