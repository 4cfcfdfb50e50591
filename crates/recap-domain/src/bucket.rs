//! Bucket module - fixed semantic categories for summary sentences

use serde::{Deserialize, Serialize};

/// Semantic category a summary sentence is sorted into
///
/// Buckets form a fixed enumeration with a defined render order. Render
/// order and per-bucket caps are the user-visible contract of the summary;
/// they never depend on categorization confidence or map insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Framing sentences: overviews, introductions
    Highlights,

    /// Core ideas, concepts, principles
    Ideas,

    /// Supporting details and coverage
    Details,

    /// Examples, applications, use cases
    Practical,

    /// Default category; also the closing line of the summary
    Takeaway,
}

impl Bucket {
    /// All buckets in render order
    pub const ALL: [Bucket; 5] = [
        Bucket::Highlights,
        Bucket::Ideas,
        Bucket::Details,
        Bucket::Practical,
        Bucket::Takeaway,
    ];

    /// Get the bucket name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Highlights => "highlights",
            Bucket::Ideas => "ideas",
            Bucket::Details => "details",
            Bucket::Practical => "practical",
            Bucket::Takeaway => "takeaway",
        }
    }

    /// Section title shown above this bucket in the rendered summary
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Highlights => "Key Highlights",
            Bucket::Ideas => "Main Ideas",
            Bucket::Details => "Important Details",
            Bucket::Practical => "Practical / Real-World Aspects",
            Bucket::Takeaway => "Purpose / Takeaway",
        }
    }

    /// Maximum number of sentences rendered for this bucket
    pub fn cap(&self) -> usize {
        match self {
            Bucket::Highlights => 2,
            Bucket::Ideas => 2,
            Bucket::Details => 2,
            Bucket::Practical => 1,
            Bucket::Takeaway => 1,
        }
    }

    /// Parse a bucket from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "highlights" => Some(Bucket::Highlights),
            "ideas" => Some(Bucket::Ideas),
            "details" => Some(Bucket::Details),
            "practical" => Some(Bucket::Practical),
            "takeaway" => Some(Bucket::Takeaway),
            _ => None,
        }
    }
}

impl std::str::FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid bucket: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_is_fixed() {
        assert_eq!(
            Bucket::ALL,
            [
                Bucket::Highlights,
                Bucket::Ideas,
                Bucket::Details,
                Bucket::Practical,
                Bucket::Takeaway,
            ]
        );
    }

    #[test]
    fn test_caps() {
        let caps: Vec<usize> = Bucket::ALL.iter().map(|b| b.cap()).collect();
        assert_eq!(caps, vec![2, 2, 2, 1, 1]);
    }

    #[test]
    fn test_parse_round_trip() {
        for bucket in Bucket::ALL {
            assert_eq!(Bucket::parse(bucket.as_str()), Some(bucket));
        }
        assert_eq!(Bucket::parse("unknown"), None);
    }
}
