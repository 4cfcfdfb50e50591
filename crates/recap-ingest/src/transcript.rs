//! Transcript cleanup and quality validation

use crate::error::IngestError;
use regex::Regex;
use std::sync::OnceLock;

/// Minimum word count for a transcript to be worth distilling
pub const MIN_TRANSCRIPT_WORDS: usize = 200;

/// Markers that identify scraped boilerplate rather than real content
const JUNK_MARKERS: [&str; 3] = ["cnn.com", "ireport", "submit your photos"];

/// Collapse whitespace runs to single spaces and trim
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check that extracted transcript text is usable
///
/// Rejects empty input, input under [`MIN_TRANSCRIPT_WORDS`] words, and
/// input carrying known junk markers.
pub fn validate_transcript(text: &str) -> Result<(), IngestError> {
    let words = text.split_whitespace().count();
    if words == 0 {
        return Err(IngestError::Empty);
    }
    if words < MIN_TRANSCRIPT_WORDS {
        return Err(IngestError::TooShort);
    }

    let lower = text.to_lowercase();
    if JUNK_MARKERS.iter().any(|m| lower.contains(m)) {
        return Err(IngestError::JunkContent);
    }

    Ok(())
}

/// Extract the video id from a YouTube watch or short URL
pub fn parse_video_id(url: &str) -> Result<String, IngestError> {
    static VIDEO_ID: OnceLock<Regex> = OnceLock::new();
    let re = VIDEO_ID
        .get_or_init(|| Regex::new(r"(?:v=|youtu\.be/)([^&\s?]+)").expect("hardcoded pattern"));

    re.captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(IngestError::InvalidUrl)
}
