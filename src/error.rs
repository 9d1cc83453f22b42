use thiserror::Error;

/// The error type for fallible graph operations.
///
/// In normal use there are no recoverable runtime errors: queries about
/// absent vertices return empty iterators or `None` rather than failing.
/// The variants below surface programmer-contract violations only, and the
/// two kinds are deliberately distinct so callers can tell a bad index
/// lookup apart from a bad arc reference.
///
/// # Examples
///
/// ```rust
/// use arcgraph::prelude::*;
///
/// let mut graph: AdjacencyDigraph<i32, &str> = AdjacencyDigraph::new();
/// graph.add_arc(1, 2, "one-two");
///
/// // Updating the label of an arc that does not exist is a contract
/// // violation, not an empty query result.
/// assert_eq!(graph.update_arc_label(&2, &1, "two-one"), Err(Error::ArcNotFound));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A vertex-level precondition was violated.
    ///
    /// Raised only by low-level helpers that bypass the usual presence
    /// check, such as [`MatrixDigraph::vertex_index`](crate::MatrixDigraph::vertex_index).
    /// The contract operations (`has_vertex`, `predecessors`, ...) never
    /// raise this; they report absence through their return values.
    #[error("vertex is not present in the graph")]
    VertexNotFound,

    /// An operation required an arc that is not present.
    ///
    /// Raised by [`DigraphMut::update_arc_label`](crate::DigraphMut::update_arc_label)
    /// when no arc connects the given source to the given target.
    #[error("no arc exists between the requested vertices")]
    ArcNotFound,
}
