//! Renderable graph derived from an automaton.
//!
//! Every node carries its own shape, assigned when the node is created from
//! its classification. Nothing depends on the order nodes are added in.

mod dot;

pub use dot::escaped_id;

use crate::core::{Automaton, StateLabel};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Label of the sentinel node that draws the arrow into the start state.
pub const SENTINEL: &str = " ";

/// Graphviz node shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    /// Text only, used for the sentinel
    Plaintext,
    /// Accepting states
    DoubleCircle,
    /// All other states
    Circle,
}

impl NodeShape {
    /// Graphviz attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::DoubleCircle => "doublecircle",
            Self::Circle => "circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub shape: NodeShape,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// A directed graph ready to be written as DOT.
///
/// # Example
///
/// ```rust
/// use dfaviz::graph::{Graph, NodeShape, SENTINEL};
/// use dfaviz::parser::parse;
///
/// let parsed = parse("1 \n0 a 1\n");
/// let graph = Graph::from_automaton("DFA", true, &parsed.automaton);
///
/// assert_eq!(graph.node(SENTINEL).unwrap().shape, NodeShape::Plaintext);
/// assert_eq!(graph.node("1").unwrap().shape, NodeShape::DoubleCircle);
/// assert_eq!(graph.node("0").unwrap().shape, NodeShape::Circle);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    name: String,
    strict: bool,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Derive the graph for an automaton.
    ///
    /// Produces the sentinel node, one node per state, an unlabeled edge
    /// from the sentinel to `"0"` and one labeled edge per transition.
    pub fn from_automaton(name: impl Into<String>, strict: bool, automaton: &Automaton) -> Self {
        let mut nodes = Vec::with_capacity(automaton.states().len() + 1);
        nodes.push(Node {
            id: SENTINEL.to_string(),
            shape: NodeShape::Plaintext,
        });
        let accepting: HashSet<&StateLabel> = automaton.accepting().iter().collect();
        nodes.extend(automaton.states().iter().map(|state| Node {
            id: state.to_string(),
            shape: classify(&accepting, state),
        }));

        let mut edges = Vec::with_capacity(automaton.transitions().len() + 1);
        edges.push(Edge {
            from: SENTINEL.to_string(),
            to: automaton.start_state().to_string(),
            label: None,
        });
        edges.extend(automaton.transitions().iter().map(|t| Edge {
            from: t.source.to_string(),
            to: t.target.to_string(),
            label: Some(t.symbol.clone()),
        }));

        Self {
            name: name.into(),
            strict,
            nodes,
            edges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the graph is emitted as a `strict digraph`.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges leaving the given node.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == id)
    }

    pub fn count_shape(&self, shape: NodeShape) -> usize {
        self.nodes.iter().filter(|n| n.shape == shape).count()
    }
}

fn classify(accepting: &HashSet<&StateLabel>, state: &StateLabel) -> NodeShape {
    if accepting.contains(state) {
        NodeShape::DoubleCircle
    } else {
        NodeShape::Circle
    }
}
