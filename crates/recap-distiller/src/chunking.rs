//! Word-window chunking for the length-limited summarization backend

/// Partitions text into bounded, non-overlapping word windows
///
/// Windows are re-joined with single spaces, so re-splitting a chunk yields
/// the same word sequence. All windows except the last hold exactly
/// `max_words` words; the last holds the remainder.
pub struct WordChunker {
    max_words: usize,
}

impl WordChunker {
    /// Create a new chunker
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    /// Chunk the given text
    ///
    /// Empty or whitespace-only input yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.max_words.max(1))
            .map(|window| window.join(" "))
            .collect()
    }
}
