//! Rendering the bucketed outline into the final bullet summary

use recap_domain::{Bucket, Outline};

/// Render the outline into the user-facing summary text
///
/// Buckets render in their fixed order. A non-empty bucket emits its title,
/// up to its cap of bulleted sentences, and a blank separator line. The
/// takeaway renders as a title plus a single unbulleted line holding its
/// first sentence. Render order and caps are the user-visible contract.
pub fn render_outline(outline: &Outline) -> String {
    let mut output: Vec<String> = Vec::new();

    for bucket in Bucket::ALL {
        let sentences = outline.get(bucket);
        if sentences.is_empty() {
            continue;
        }

        if bucket == Bucket::Takeaway {
            output.push(bucket.title().to_string());
            if let Some(first) = sentences.first() {
                output.push(first.clone());
            }
        } else {
            output.push(bucket.title().to_string());
            output.extend(
                sentences
                    .iter()
                    .take(bucket.cap())
                    .map(|s| format!("• {}", s)),
            );
            output.push(String::new());
        }
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_are_enforced() {
        let mut outline = Outline::new();
        for i in 0..5 {
            outline.push(Bucket::Highlights, format!("highlight {}", i));
            outline.push(Bucket::Practical, format!("practical {}", i));
        }

        let rendered = render_outline(&outline);
        let bullets = rendered.lines().filter(|l| l.starts_with("• ")).count();
        assert_eq!(bullets, 3); // 2 highlights + 1 practical
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let mut outline = Outline::new();
        outline.push(Bucket::Takeaway, "closing line");
        outline.push(Bucket::Ideas, "an idea");
        outline.push(Bucket::Highlights, "a highlight");

        let rendered = render_outline(&outline);
        let highlights_at = rendered.find("Key Highlights").unwrap();
        let ideas_at = rendered.find("Main Ideas").unwrap();
        let takeaway_at = rendered.find("Purpose / Takeaway").unwrap();
        assert!(highlights_at < ideas_at);
        assert!(ideas_at < takeaway_at);
    }

    #[test]
    fn test_takeaway_is_a_single_unbulleted_line() {
        let mut outline = Outline::new();
        outline.push(Bucket::Takeaway, "first closing line");
        outline.push(Bucket::Takeaway, "second closing line");

        let rendered = render_outline(&outline);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, ["Purpose / Takeaway", "first closing line"]);
    }

    #[test]
    fn test_empty_buckets_emit_nothing() {
        let outline = Outline::new();
        assert_eq!(render_outline(&outline), "");

        let mut outline = Outline::new();
        outline.push(Bucket::Details, "one lonely detail sentence");
        let rendered = render_outline(&outline);
        assert!(!rendered.contains("Key Highlights"));
        assert!(rendered.contains("Important Details"));
    }

    #[test]
    fn test_bullet_sections_end_with_separator() {
        let mut outline = Outline::new();
        outline.push(Bucket::Ideas, "the idea");

        let rendered = render_outline(&outline);
        assert_eq!(rendered, "Main Ideas\n• the idea\n");
    }
}
