//! dfaviz: render deterministic finite automata with Graphviz
//!
//! dfaviz reads a flat text description of a DFA and draws it. Parsing and
//! graph construction form a pure core with no side effects; reading the
//! file, writing DOT, running Graphviz and opening the viewer are Stillwater
//! effects in the [`render`] shell.
//!
//! # Input Format
//!
//! - Line 1: accepting states, whitespace-separated (`1 2 `)
//! - Every other line: `source symbol target` (`0 a 1`); lines with any
//!   other shape are skipped and listed in the [`ParseReport`]
//!
//! State `"0"` is the start state by convention.
//!
//! # Example
//!
//! ```rust
//! use dfaviz::graph::{Graph, NodeShape};
//! use dfaviz::parser::parse;
//!
//! let parsed = parse("1 2 \n0 a 1\n1 b 2\n2 c 0\n");
//! let graph = Graph::from_automaton("DFA", true, &parsed.automaton);
//!
//! assert_eq!(graph.count_shape(NodeShape::DoubleCircle), 2);
//! assert_eq!(graph.edges().len(), 4);
//! println!("{}", graph.to_dot());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod graph;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use config::{OutputFormat, RenderConfig};
pub use crate::core::{Automaton, StateLabel, Transition};
pub use graph::Graph;
pub use parser::{parse, ParseReport, ParsedAutomaton};
pub use render::{render_file, RenderEnv, RenderError, RenderSummary};
