//! Keyword categorization of summary sentences and the collapse fallback

use recap_domain::{split_sentences, Bucket, Outline};

/// Minimum words for a summary sentence to count as a key point
pub const MIN_KEY_POINT_WORDS: usize = 6;

const HIGHLIGHT_KEYWORDS: [&str; 4] = ["overview", "introduction", "explains", "discusses"];
const IDEA_KEYWORDS: [&str; 4] = ["idea", "concept", "principle", "approach"];
const DETAIL_KEYWORDS: [&str; 4] = ["includes", "covers", "details", "features"];
const PRACTICAL_KEYWORDS: [&str; 4] = ["example", "application", "use case", "practice"];

/// Classify the sentences of one chunk summary into buckets
///
/// Keyword sets are tested in fixed priority order against the lower-cased
/// sentence; the first match wins, so each sentence lands in exactly one
/// bucket. Sentences matching nothing default to the takeaway bucket.
pub fn categorize_key_points(summary: &str) -> Outline {
    let mut outline = Outline::new();

    for sentence in split_sentences(summary, MIN_KEY_POINT_WORDS) {
        let lower = sentence.to_lowercase();

        let bucket = if contains_any(&lower, &HIGHLIGHT_KEYWORDS) {
            Bucket::Highlights
        } else if contains_any(&lower, &IDEA_KEYWORDS) {
            Bucket::Ideas
        } else if contains_any(&lower, &DETAIL_KEYWORDS) {
            Bucket::Details
        } else if contains_any(&lower, &PRACTICAL_KEYWORDS) {
            Bucket::Practical
        } else {
            Bucket::Takeaway
        };

        outline.push(bucket, sentence);
    }

    outline
}

/// Redistribute sentences by position when categorization has collapsed
///
/// Trigger: at most one bucket is non-empty and at least one sentence exists.
/// The last deduplicated sentence becomes the takeaway; the remainder fills
/// fixed positional slots. Extracting the takeaway first keeps the slots
/// disjoint even for very short sentence lists. Returns whether the fallback
/// ran.
///
/// This guards against keyword categorization collapsing onto a single bucket
/// for domain text with no matching vocabulary.
pub fn redistribute_if_collapsed(outline: &mut Outline) -> bool {
    if outline.non_empty_buckets() > 1 {
        return false;
    }

    let all = outline.sentences();
    let Some(takeaway) = all.last().cloned() else {
        return false;
    };
    let rest = &all[..all.len() - 1];

    outline.set(Bucket::Highlights, slot(rest, 0, 2));
    outline.set(Bucket::Ideas, slot(rest, 2, 4));
    outline.set(Bucket::Details, slot(rest, 4, 6));
    outline.set(Bucket::Practical, slot(rest, 6, 7));
    outline.set(Bucket::Takeaway, vec![takeaway]);

    true
}

fn contains_any(sentence: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| sentence.contains(k))
}

fn slot(items: &[String], start: usize, end: usize) -> Vec<String> {
    let start = start.min(items.len());
    let end = end.min(items.len());
    items[start..end].to_vec()
}
