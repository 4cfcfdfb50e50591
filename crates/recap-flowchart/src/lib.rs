//! Recap Flowchart
//!
//! Selects an ordered subset of sentences as concept steps and renders them
//! as a linear Graphviz DOT digraph: one node per step, a single directed
//! edge between consecutive steps, no branching and no cycles.
//!
//! Step extraction is independent of the summarizer — it works on the raw
//! text, takes sentences in document order, and does no scoring or
//! deduplication.
//!
//! # Example Usage
//!
//! ```
//! use recap_flowchart::{extract_steps, render_dot, DotStyle, DEFAULT_MAX_STEPS};
//!
//! let text = "First the loader validates the uploaded archive contents. \
//!             Then the parser builds an index of every section.";
//! let steps = extract_steps(text, DEFAULT_MAX_STEPS);
//! let dot = render_dot(&steps, &DotStyle::default());
//! assert!(dot.starts_with("digraph"));
//! ```

#![warn(missing_docs)]

mod dot;
mod steps;

pub use dot::{render_dot, DotStyle};
pub use steps::{extract_steps, DEFAULT_MAX_STEPS, MIN_STEP_WORDS};
