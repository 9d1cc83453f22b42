//! Convenient re-exports of the most commonly used types and traits.
//!
//! Importing the prelude brings the contract traits into scope alongside
//! both representations, which is what nearly every consumer needs:
//!
//! ```rust,ignore
//! use arcgraph::prelude::*;
//!
//! let mut graph: AdjacencyDigraph<&str> = AdjacencyDigraph::new();
//! graph.add_arc("a", "b", ());
//! ```

pub use crate::{
    AdjacencyDigraph, Arc, Digraph, DigraphMut, DisjointSet, Error, MatrixDigraph, Result,
};
