//! Graphviz DOT rendering for the step chart

/// Visual styling for the rendered chart
#[derive(Debug, Clone)]
pub struct DotStyle {
    /// Column width node labels are wrapped to
    pub wrap_width: usize,

    /// Node font
    pub font_name: String,

    /// Node font size (points)
    pub font_size: u32,

    /// Node border color
    pub border_color: String,

    /// Edge color
    pub edge_color: String,

    /// Fill for even-indexed nodes
    pub fill_even: String,

    /// Fill for odd-indexed nodes
    pub fill_odd: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            wrap_width: 38,
            font_name: "Helvetica".to_string(),
            font_size: 11,
            border_color: "#1565C0".to_string(),
            edge_color: "#424242".to_string(),
            fill_even: "#E3F2FD".to_string(),
            fill_odd: "#FFF9C4".to_string(),
        }
    }
}

/// Render steps as a linear DOT digraph
///
/// Each step becomes one box node with an alternating fill; consecutive
/// steps are joined by a single directed edge, forming a simple path graph.
/// Labels are word-wrapped to the style's column width before hand-off.
pub fn render_dot(steps: &[String], style: &DotStyle) -> String {
    let mut dot = String::new();

    dot.push_str("digraph {\n");
    dot.push_str("    rankdir=TB;\n");
    dot.push_str("    bgcolor=\"white\";\n");
    dot.push_str(&format!(
        "    node [shape=box, style=\"rounded,filled\", fontname=\"{}\", fontsize={}, color=\"{}\"];\n",
        style.font_name, style.font_size, style.border_color
    ));
    dot.push_str(&format!(
        "    edge [arrowsize=0.6, color=\"{}\"];\n",
        style.edge_color
    ));

    for (i, step) in steps.iter().enumerate() {
        let fill = if i % 2 == 0 {
            &style.fill_even
        } else {
            &style.fill_odd
        };
        let label = escape_label(&wrap_text(step, style.wrap_width));
        dot.push_str(&format!(
            "    N{} [label=\"{}\", fillcolor=\"{}\"];\n",
            i, label, fill
        ));
    }

    for i in 1..steps.len() {
        dot.push_str(&format!("    N{} -> N{};\n", i - 1, i));
    }

    dot.push_str("}\n");
    dot
}

/// Greedy word wrap to `width` columns; words longer than a line stand alone
fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("Step number {} does one specific well defined thing.", i))
            .collect()
    }

    #[test]
    fn test_node_and_edge_counts() {
        let dot = render_dot(&steps(4), &DotStyle::default());

        let nodes = dot.lines().filter(|l| l.contains("[label=")).count();
        let edges = dot.lines().filter(|l| l.contains("->")).count();
        assert_eq!(nodes, 4);
        assert_eq!(edges, 3);
    }

    #[test]
    fn test_edges_form_a_path() {
        let dot = render_dot(&steps(3), &DotStyle::default());
        assert!(dot.contains("N0 -> N1;"));
        assert!(dot.contains("N1 -> N2;"));
        assert!(!dot.contains("N2 -> N0;"));
    }

    #[test]
    fn test_fills_alternate() {
        let dot = render_dot(&steps(2), &DotStyle::default());
        assert!(dot.contains("fillcolor=\"#E3F2FD\""));
        assert!(dot.contains("fillcolor=\"#FFF9C4\""));
    }

    #[test]
    fn test_empty_steps_render_an_empty_digraph() {
        let dot = render_dot(&[], &DotStyle::default());
        assert!(dot.starts_with("digraph {"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(!dot.contains("label="));
    }

    #[test]
    fn test_labels_wrap_at_width() {
        let long = vec![
            "This deliberately verbose sentence keeps going long enough to need wrapping."
                .to_string(),
        ];
        let dot = render_dot(&long, &DotStyle::default());
        assert!(dot.contains("\\n"));

        // Every wrapped segment fits the column width
        let wrapped = wrap_text(&long[0], 38);
        assert!(wrapped.lines().all(|l| l.chars().count() <= 38));
    }

    #[test]
    fn test_quotes_in_labels_are_escaped() {
        let quoted = vec!["The paper calls this the \"hot path\" of the system.".to_string()];
        let dot = render_dot(&quoted, &DotStyle::default());
        assert!(dot.contains("\\\"hot path\\\""));
    }

    #[test]
    fn test_wrap_keeps_word_order() {
        let wrapped = wrap_text("alpha beta gamma delta epsilon zeta", 11);
        assert_eq!(wrapped, "alpha beta\ngamma delta\nepsilon\nzeta");
    }
}
