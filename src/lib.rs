// Copyright 2025 the arcgraph developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # arcgraph
//!
//! A generic directed-graph (digraph) library with interchangeable backing
//! representations. Build a graph through one trait contract, then run
//! representation-agnostic algorithms over it: breadth-first shortest paths,
//! distance queries, weakly-connected components (union-find) and
//! strongly-connected components (Tarjan).
//!
//! ## Features
//!
//! - **One contract, two stores** - [`Digraph`]/[`DigraphMut`] describe the
//!   full operation set; [`AdjacencyDigraph`] (sparse, map-backed) and
//!   [`MatrixDigraph`] (dense, matrix-backed) implement it interchangeably
//! - **Value-keyed vertices** - any `Eq + Hash + Clone` type is a vertex;
//!   equal values denote the same vertex, no separate handle type to manage
//! - **Labeled arcs** - arcs optionally carry a generic label (`()` for
//!   unlabeled graphs); at most one arc per ordered vertex pair
//! - **Stack-safe analysis** - Tarjan's SCC runs on an explicit work stack,
//!   so deep graphs cannot exhaust the call stack
//! - **Diagnostics** - GraphViz DOT export for eyeballing a topology
//!
//! ## Quick Start
//!
//! ```rust
//! use arcgraph::prelude::*;
//!
//! let mut graph: AdjacencyDigraph<&str> = AdjacencyDigraph::new();
//! graph.add_arc("a", "b", ());
//! graph.add_arc("b", "c", ());
//! graph.add_arc("c", "a", ());
//! graph.add_arc("c", "d", ());
//!
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_arcs(), 4);
//! assert_eq!(graph.distance(&"a", &"d"), Some(3));
//!
//! // The cycle a -> b -> c -> a is one strongly connected component.
//! let sccs = graph.strongly_connected_components();
//! assert_eq!(sccs.number_of_subsets(), 2);
//! assert!(sccs.same_subset(&"a", &"c"));
//! assert!(!sccs.same_subset(&"a", &"d"));
//! ```
//!
//! ## Choosing a Representation
//!
//! | Representation | Arc check | Neighbor query | Vertex removal | Best for |
//! |----------------|-----------|----------------|----------------|----------|
//! | [`AdjacencyDigraph`] | O(degree) | O(degree) | O(degree) | sparse graphs |
//! | [`MatrixDigraph`] | O(1) | O(n) | O(n) | dense graphs, frequent arc checks |
//!
//! Algorithms depend only on the [`Digraph`] contract, so the two
//! representations can be swapped without touching analysis code.
//!
//! ## Concurrency
//!
//! The library is single-threaded by design: no internal locking, no
//! suspension points. All types are [`Send`] and [`Sync`] when their vertex
//! and label types are, so a fully built graph may be shared read-only
//! across threads; concurrent mutation must be serialized externally.

mod adjacency;
mod arc;
mod error;
mod matrix;
mod traits;
mod union_find;

pub mod algorithms;
pub mod dot;
pub mod prelude;

pub use adjacency::AdjacencyDigraph;
pub use arc::Arc;
pub use error::Error;
pub use matrix::MatrixDigraph;
pub use traits::{Digraph, DigraphMut};
pub use union_find::DisjointSet;

/// Crate-wide result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
