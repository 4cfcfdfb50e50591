//! Outline module - the Bucket → sentence-list mapping built during a run

use crate::bucket::Bucket;

/// Bucketed key-point sentences accumulated over one distillation run
///
/// Sentence order within a bucket is insertion order: chunk processing order
/// first, then within-chunk sentence order. An `Outline` lives for exactly
/// one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    highlights: Vec<String>,
    ideas: Vec<String>,
    details: Vec<String>,
    practical: Vec<String>,
    takeaway: Vec<String>,
}

impl Outline {
    /// Create an empty outline
    pub fn new() -> Self {
        Self::default()
    }

    /// Sentences currently assigned to a bucket
    pub fn get(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Highlights => &self.highlights,
            Bucket::Ideas => &self.ideas,
            Bucket::Details => &self.details,
            Bucket::Practical => &self.practical,
            Bucket::Takeaway => &self.takeaway,
        }
    }

    /// Append a sentence to a bucket
    pub fn push(&mut self, bucket: Bucket, sentence: impl Into<String>) {
        self.slot_mut(bucket).push(sentence.into());
    }

    /// Replace a bucket's sentences wholesale
    pub fn set(&mut self, bucket: Bucket, sentences: Vec<String>) {
        *self.slot_mut(bucket) = sentences;
    }

    /// Append every sentence of `other`, bucket by bucket, preserving order
    pub fn merge(&mut self, other: Outline) {
        self.highlights.extend(other.highlights);
        self.ideas.extend(other.ideas);
        self.details.extend(other.details);
        self.practical.extend(other.practical);
        self.takeaway.extend(other.takeaway);
    }

    /// Number of buckets holding at least one sentence
    pub fn non_empty_buckets(&self) -> usize {
        Bucket::ALL
            .iter()
            .filter(|b| !self.get(**b).is_empty())
            .count()
    }

    /// True if no bucket holds any sentence
    pub fn is_empty(&self) -> bool {
        self.non_empty_buckets() == 0
    }

    /// All sentences, deduplicated, in first-seen order
    ///
    /// Buckets are walked in render order. Duplicates can only arise across
    /// chunks with identical text (categorization itself is mutually
    /// exclusive); each sentence is kept once. This flat view is also the
    /// reduced, unbucketed summary shape.
    pub fn sentences(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for bucket in Bucket::ALL {
            for sentence in self.get(bucket) {
                if !seen.contains(sentence) {
                    seen.push(sentence.clone());
                }
            }
        }
        seen
    }

    fn slot_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Highlights => &mut self.highlights,
            Bucket::Ideas => &mut self.ideas,
            Bucket::Details => &mut self.details,
            Bucket::Practical => &mut self.practical,
            Bucket::Takeaway => &mut self.takeaway,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut outline = Outline::new();
        outline.push(Bucket::Ideas, "The main idea is caching.");
        assert_eq!(outline.get(Bucket::Ideas).len(), 1);
        assert!(outline.get(Bucket::Details).is_empty());
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut first = Outline::new();
        first.push(Bucket::Takeaway, "one");
        let mut second = Outline::new();
        second.push(Bucket::Takeaway, "two");

        first.merge(second);
        assert_eq!(first.get(Bucket::Takeaway), ["one", "two"]);
    }

    #[test]
    fn test_sentences_deduplicates_in_first_seen_order() {
        let mut outline = Outline::new();
        outline.push(Bucket::Highlights, "alpha");
        outline.push(Bucket::Takeaway, "beta");
        outline.push(Bucket::Takeaway, "alpha");

        assert_eq!(outline.sentences(), ["alpha", "beta"]);
    }

    #[test]
    fn test_non_empty_buckets() {
        let mut outline = Outline::new();
        assert_eq!(outline.non_empty_buckets(), 0);
        assert!(outline.is_empty());

        outline.push(Bucket::Ideas, "x");
        outline.push(Bucket::Ideas, "y");
        outline.push(Bucket::Practical, "z");
        assert_eq!(outline.non_empty_buckets(), 2);
    }
}
