//! GraphViz DOT export.
//!
//! This module renders a digraph as a DOT document for diagnostics. The
//! output is structurally stable - every vertex listed once, then every
//! arc once - but not guaranteed byte-for-byte stable across versions; it
//! is not a wire format.

use std::fmt;

use crate::Digraph;

/// Escapes a string for safe use inside a quoted DOT identifier or label.
///
/// Handles backslashes, double quotes, and line breaks.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::dot::escape;
///
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// Renders `graph` as a DOT document.
///
/// Vertices appear first, quoted and labeled by their display form, then
/// arcs as `"source" -> "target";` lines, both in the graph's enumeration
/// order.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::{dot, prelude::*};
///
/// let mut graph: AdjacencyDigraph<&str> = AdjacencyDigraph::new();
/// graph.add_arc("a", "b", ());
///
/// let rendered = dot::render(&graph);
/// assert!(rendered.contains("\"a\" -> \"b\";"));
/// ```
#[must_use]
pub fn render<G>(graph: &G) -> String
where
    G: Digraph,
    G::Vertex: fmt::Display,
{
    let mut out = String::from("digraph {\n");
    for vertex in graph.vertices() {
        let name = escape(&vertex.to_string());
        out.push_str(&format!("    \"{name}\" [label=\"{name}\"];\n"));
    }
    for arc in graph.arcs() {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape(&arc.source().to_string()),
            escape(&arc.target().to_string())
        ));
    }
    out.push('}');
    out.push('\n');
    out
}
