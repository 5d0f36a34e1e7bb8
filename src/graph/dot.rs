//! Conversion of [`Graph`] into `graphviz_rust` DOT structures.
//!
//! Printing goes through the `graphviz_rust` printer, so output is
//! deterministic: the same graph always produces the same bytes.

use super::Graph;
use graphviz_rust::dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph as DotGraph, Id, Node as DotNode, NodeId, Stmt,
    Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

/// Quoted DOT identifier.
///
/// Every label is quoted so that `" "` and labels such as `-1` are valid
/// identifiers. `Id::Escaped` keeps its text verbatim, so embedded quotes
/// and backslashes are escaped here.
pub fn escaped_id(text: &str) -> Id {
    Id::Escaped(format!(
        "\"{}\"",
        text.replace('\\', "\\\\").replace('"', "\\\"")
    ))
}

fn node_id(text: &str) -> NodeId {
    NodeId(escaped_id(text), None)
}

impl Graph {
    /// Build the `graphviz_rust` digraph for this graph.
    pub fn to_dot_graph(&self) -> DotGraph {
        let mut stmts = Vec::with_capacity(self.nodes.len() + self.edges.len());

        for node in &self.nodes {
            stmts.push(Stmt::Node(DotNode {
                id: node_id(&node.id),
                attributes: vec![Attribute(
                    Id::Plain("shape".to_string()),
                    Id::Plain(node.shape.as_str().to_string()),
                )],
            }));
        }

        for edge in &self.edges {
            let attributes = edge
                .label
                .iter()
                .map(|label| Attribute(Id::Plain("label".to_string()), escaped_id(label)))
                .collect();
            stmts.push(Stmt::Edge(DotEdge {
                ty: EdgeTy::Pair(
                    Vertex::N(node_id(&edge.from)),
                    Vertex::N(node_id(&edge.to)),
                ),
                attributes,
            }));
        }

        DotGraph::DiGraph {
            id: escaped_id(&self.name),
            strict: self.strict,
            stmts,
        }
    }

    /// Render the graph as DOT source.
    ///
    /// ```rust
    /// use dfaviz::graph::Graph;
    /// use dfaviz::parser::parse;
    ///
    /// let parsed = parse("1 \n0 a 1\n");
    /// let dot = Graph::from_automaton("DFA", true, &parsed.automaton).to_dot();
    ///
    /// assert!(dot.starts_with("strict digraph"));
    /// assert!(dot.contains("shape=doublecircle"));
    /// ```
    pub fn to_dot(&self) -> String {
        self.to_dot_graph().print(&mut PrinterContext::default())
    }
}
