//! Trait definitions for the digraph contract.
//!
//! This module defines the two capability traits every graph representation
//! implements. By programming against these traits, the algorithms in
//! [`crate::algorithms`] work with any backing store without modification.
//!
//! # Architecture
//!
//! - [`Digraph`] - the read-only contract: counts, membership, neighbor
//!   queries, enumeration, plus every derived operation (degrees, path and
//!   circuit predicates, shortest paths, connectivity analysis, DOT export)
//!   as provided methods
//! - [`DigraphMut`] - the mutation contract: vertex/arc insertion and
//!   removal, label updates
//!
//! # Design Principles
//!
//! ## Iterator-Based Queries
//!
//! All enumeration and adjacency queries return iterators rather than
//! collections, enabling lazy evaluation and avoiding allocations for
//! simple traversals.
//!
//! ## Absence Is Not an Error
//!
//! Querying an absent vertex yields an empty iterator, `None`, or `false` -
//! never an error. Only operations with a hard precondition (see
//! [`DigraphMut::update_arc_label`]) are fallible.
//!
//! ## Static Dispatch
//!
//! Vertex and label types are associated types bounded by equality and
//! hashing capability; algorithms are generic functions, not virtual calls.

use std::fmt;
use std::hash::Hash;

use crate::{algorithms, dot, Arc, DisjointSet, Result};

/// The read-only digraph contract.
///
/// A digraph owns a set of vertices (compared by value) and a set of arcs
/// (ordered vertex pairs carrying a label, at most one arc per pair). The
/// required methods cover counts, membership, and neighbor queries; the
/// provided methods derive the rest of the operation set from them, so a
/// representation only has to supply the primitives.
///
/// Enumeration order is representation-defined: it is stable while the
/// graph is not mutated, and deterministic for a fixed representation and
/// mutation history, but differs between representations.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::prelude::*;
///
/// fn describe<G: Digraph>(graph: &G) -> String {
///     format!("{} vertices, {} arcs", graph.num_vertices(), graph.num_arcs())
/// }
///
/// let mut sparse: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
/// sparse.add_arc(1, 2, ());
/// assert_eq!(describe(&sparse), "2 vertices, 1 arcs");
/// ```
pub trait Digraph {
    /// The vertex type. Two equal values denote the same vertex.
    type Vertex: Eq + Hash + Clone;
    /// The arc label type. Use `()` for unlabeled graphs.
    type Label: Clone;

    /// Returns the number of vertices currently present. O(1).
    fn num_vertices(&self) -> usize;

    /// Returns the number of distinct (source, target) arcs present. O(1).
    fn num_arcs(&self) -> usize;

    /// Returns `true` if `vertex` is present in the graph.
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns `true` if an arc from `source` to `target` is present.
    ///
    /// Absent endpoints make this `false`, never an error.
    fn has_arc(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool;

    /// Returns the label of the arc from `source` to `target`, or `None`
    /// if no such arc exists.
    fn arc_label(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<&Self::Label>;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns an iterator over all arcs in the graph.
    ///
    /// Arcs are materialized on the fly; endpoints and labels are cloned.
    fn arcs(&self) -> impl Iterator<Item = Arc<Self::Vertex, Self::Label>>;

    /// Returns an iterator over the successors of `vertex` - the targets of
    /// its outgoing arcs.
    ///
    /// Empty (never an error) when `vertex` is absent.
    fn successors(&self, vertex: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns an iterator over the predecessors of `vertex` - the sources
    /// of its incoming arcs.
    ///
    /// Empty (never an error) when `vertex` is absent.
    fn predecessors(&self, vertex: &Self::Vertex) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns the out-degree of `vertex`: the number of its successors.
    ///
    /// Zero when `vertex` is absent.
    fn out_degree(&self, vertex: &Self::Vertex) -> usize {
        self.successors(vertex).count()
    }

    /// Returns the in-degree of `vertex`: the number of its predecessors.
    ///
    /// Zero when `vertex` is absent.
    fn in_degree(&self, vertex: &Self::Vertex) -> usize {
        self.predecessors(vertex).count()
    }

    /// Returns `true` if `u` is a predecessor of `v`, i.e. the arc (u, v)
    /// exists.
    fn is_predecessor(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.has_arc(u, v)
    }

    /// Returns `true` if `u` is a successor of `v`, i.e. the arc (v, u)
    /// exists.
    fn is_successor(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.has_arc(v, u)
    }

    /// Returns an iterator over the outgoing arcs of `vertex`.
    ///
    /// Derived from [`successors`](Digraph::successors) and
    /// [`arc_label`](Digraph::arc_label); empty when `vertex` is absent.
    fn outgoing_arcs(
        &self,
        vertex: &Self::Vertex,
    ) -> impl Iterator<Item = Arc<Self::Vertex, Self::Label>> {
        self.successors(vertex).filter_map(move |target| {
            self.arc_label(vertex, target)
                .map(|label| Arc::new(vertex.clone(), target.clone(), label.clone()))
        })
    }

    /// Returns an iterator over the incoming arcs of `vertex`.
    ///
    /// Derived from [`predecessors`](Digraph::predecessors) and
    /// [`arc_label`](Digraph::arc_label); empty when `vertex` is absent.
    fn incoming_arcs(
        &self,
        vertex: &Self::Vertex,
    ) -> impl Iterator<Item = Arc<Self::Vertex, Self::Label>> {
        self.predecessors(vertex).filter_map(move |source| {
            self.arc_label(source, vertex)
                .map(|label| Arc::new(source.clone(), vertex.clone(), label.clone()))
        })
    }

    /// Returns `true` if every consecutive pair in `sequence` is a
    /// registered arc.
    ///
    /// An empty or single-vertex sequence is trivially a path.
    fn is_path(&self, sequence: &[Self::Vertex]) -> bool {
        sequence
            .windows(2)
            .all(|pair| self.has_arc(&pair[0], &pair[1]))
    }

    /// Returns `true` if `sequence` is empty, or is a path whose first
    /// element equals its last.
    fn is_circuit(&self, sequence: &[Self::Vertex]) -> bool {
        match (sequence.first(), sequence.last()) {
            (Some(first), Some(last)) => first == last && self.is_path(sequence),
            _ => true,
        }
    }

    /// Returns the vertex sequence of a minimum-arc-count path from
    /// `source` to `target` (inclusive), or `None` when `target` is
    /// unreachable.
    ///
    /// Among equal-length paths, the one discovered first by breadth-first
    /// search visiting successors in [`successors`](Digraph::successors)
    /// order is returned - BFS-discovery order, not any canonical minimum.
    #[must_use]
    fn a_shortest_path(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<Vec<Self::Vertex>>
    where
        Self: Sized,
    {
        algorithms::shortest_path(self, source, target)
    }

    /// Returns the breadth-first level of `target` from `source` - the
    /// number of arcs on a shortest path - or `None` when unreachable.
    ///
    /// Not symmetric: `distance(u, v)` and `distance(v, u)` are independent.
    #[must_use]
    fn distance(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<usize>
    where
        Self: Sized,
    {
        algorithms::distance(self, source, target)
    }

    /// Renders the graph in GraphViz DOT format.
    ///
    /// Every vertex is listed once (quoted, labeled by its display form),
    /// then every arc once. Intended for diagnostics; the output is
    /// structurally but not byte-for-byte stable across versions.
    #[must_use]
    fn to_dot(&self) -> String
    where
        Self::Vertex: fmt::Display,
        Self: Sized,
    {
        dot::render(self)
    }

    /// Computes the weakly-connected components of the graph.
    ///
    /// Returns a [`DisjointSet`] over all vertices in which the endpoints
    /// of every arc have been unioned, treating arcs as undirected edges
    /// for this purpose only.
    #[must_use]
    fn weakly_connected_components(&self) -> DisjointSet<Self::Vertex>
    where
        Self: Sized,
    {
        algorithms::weakly_connected_components(self)
    }

    /// Computes the strongly-connected components of the graph using
    /// Tarjan's algorithm.
    ///
    /// Returns a [`DisjointSet`] over all vertices in which mutually
    /// reachable vertices share a subset. Runs on an explicit work stack,
    /// so arbitrarily deep graphs are safe.
    #[must_use]
    fn strongly_connected_components(&self) -> DisjointSet<Self::Vertex>
    where
        Self: Sized,
    {
        algorithms::strongly_connected_components(self)
    }
}

/// The mutation contract for digraph representations.
///
/// All mutations are total: adding something already present or removing
/// something absent is a no-op reported through the `bool` return value.
/// The one exception is [`update_arc_label`](DigraphMut::update_arc_label),
/// which has a hard precondition (the arc must exist) and is fallible.
pub trait DigraphMut: Digraph {
    /// Adds `vertex` to the graph.
    ///
    /// Returns `true` if the vertex was inserted, `false` if it was
    /// already present (no-op).
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Removes `vertex` and every arc where it is a source or a target.
    ///
    /// Returns `true` if the vertex was present, `false` otherwise (no-op).
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;

    /// Adds an arc from `source` to `target` carrying `label`, implicitly
    /// adding missing endpoints first.
    ///
    /// Returns `true` if the arc was inserted. If the (source, target) arc
    /// already exists this is a no-op returning `false`, even when `label`
    /// differs from the existing one - replacing a label requires
    /// [`update_arc_label`](DigraphMut::update_arc_label).
    fn add_arc(&mut self, source: Self::Vertex, target: Self::Vertex, label: Self::Label) -> bool;

    /// Removes the arc from `source` to `target`.
    ///
    /// Returns `true` if the arc was present, `false` otherwise (no-op).
    fn remove_arc(&mut self, source: &Self::Vertex, target: &Self::Vertex) -> bool;

    /// Replaces the label of the existing arc from `source` to `target`,
    /// returning the previous label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArcNotFound`](crate::Error::ArcNotFound) when no
    /// such arc exists. Updating an absent arc is a contract violation,
    /// unlike queries, which report absence through their return values.
    fn update_arc_label(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
        label: Self::Label,
    ) -> Result<Self::Label>;
}
