//! Adjacency-map digraph representation.
//!
//! This module provides [`AdjacencyDigraph`], the sparse representation:
//! per-vertex lists of outgoing arcs and of predecessor vertices, indexed
//! by two hash maps. It is the right default for graphs whose vertices
//! touch few arcs each.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{Arc, Digraph, DigraphMut, Error, Result};

/// A digraph backed by per-vertex adjacency collections.
///
/// Internal state is two mappings: vertex to its outgoing [`Arc`]s, and
/// vertex to its predecessor vertices. The key set of the outgoing map is
/// the authoritative vertex enumeration; every vertex has an entry in both
/// maps, even when its collections are empty.
///
/// # Complexity
///
/// The per-vertex collections are plain vectors, not hash sets, so
/// arc-existence checks and arc removal are linear in the degree of the
/// vertex involved. This is a deliberate simplicity trade-off: for the
/// sparse graphs this representation targets, degrees are small and the
/// vector wins on constant factors and memory. Workloads dominated by arc
/// checks on dense graphs should use [`MatrixDigraph`](crate::MatrixDigraph)
/// instead.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::prelude::*;
///
/// let mut graph: AdjacencyDigraph<&str, u32> = AdjacencyDigraph::new();
/// graph.add_arc("amsterdam", "brussels", 173);
/// graph.add_arc("brussels", "cologne", 215);
///
/// assert!(graph.has_arc(&"amsterdam", &"brussels"));
/// assert_eq!(graph.arc_label(&"brussels", &"cologne"), Some(&215));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyDigraph<V, L = ()> {
    /// Vertex to outgoing arcs; the key set is the vertex set.
    outgoing: HashMap<V, Vec<Arc<V, L>>>,
    /// Vertex to predecessor vertices.
    incoming: HashMap<V, Vec<V>>,
    /// Count of distinct (source, target) pairs present.
    num_arcs: usize,
}

impl<V: Eq + Hash + Clone, L: Clone> AdjacencyDigraph<V, L> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        AdjacencyDigraph {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            num_arcs: 0,
        }
    }

    /// Creates a new empty graph with capacity pre-allocated for
    /// approximately `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyDigraph {
            outgoing: HashMap::with_capacity(vertices),
            incoming: HashMap::with_capacity(vertices),
            num_arcs: 0,
        }
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }
}

impl<V: Eq + Hash + Clone, L: Clone> Default for AdjacencyDigraph<V, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone, L: Clone> Digraph for AdjacencyDigraph<V, L> {
    type Vertex = V;
    type Label = L;

    fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }

    fn has_arc(&self, source: &V, target: &V) -> bool {
        self.outgoing
            .get(source)
            .is_some_and(|arcs| arcs.iter().any(|arc| arc.target() == target))
    }

    fn arc_label(&self, source: &V, target: &V) -> Option<&L> {
        self.outgoing
            .get(source)?
            .iter()
            .find(|arc| arc.target() == target)
            .map(Arc::label)
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.outgoing.keys()
    }

    fn arcs(&self) -> impl Iterator<Item = Arc<V, L>> {
        self.outgoing.values().flatten().cloned()
    }

    fn successors(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.outgoing
            .get(vertex)
            .into_iter()
            .flatten()
            .map(Arc::target)
    }

    fn predecessors(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.incoming.get(vertex).into_iter().flatten()
    }

    // The outgoing lists already hold complete arcs; skip the derived path.
    fn outgoing_arcs(&self, vertex: &V) -> impl Iterator<Item = Arc<V, L>> {
        self.outgoing.get(vertex).into_iter().flatten().cloned()
    }
}

impl<V: Eq + Hash + Clone, L: Clone> DigraphMut for AdjacencyDigraph<V, L> {
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.incoming.insert(vertex.clone(), Vec::new());
        self.outgoing.insert(vertex, Vec::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.outgoing.remove(vertex) else {
            return false;
        };

        // Unlink the vertex from each successor's predecessor list.
        self.num_arcs -= outgoing.len();
        for arc in &outgoing {
            if arc.target() == vertex {
                continue; // self-loop, its entry is dropped below
            }
            if let Some(predecessors) = self.incoming.get_mut(arc.target()) {
                predecessors.retain(|p| p != vertex);
            }
        }

        // Drop each incoming arc from its source's outgoing list. A
        // self-loop was already accounted for through the outgoing list.
        if let Some(incoming) = self.incoming.remove(vertex) {
            for source in incoming {
                if source == *vertex {
                    continue;
                }
                if let Some(arcs) = self.outgoing.get_mut(&source) {
                    arcs.retain(|arc| arc.target() != vertex);
                    self.num_arcs -= 1;
                }
            }
        }

        true
    }

    fn add_arc(&mut self, source: V, target: V, label: L) -> bool {
        if self.has_arc(&source, &target) {
            return false;
        }
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());

        if let Some(predecessors) = self.incoming.get_mut(&target) {
            predecessors.push(source.clone());
        }
        if let Some(arcs) = self.outgoing.get_mut(&source) {
            arcs.push(Arc::new(source, target, label));
        }
        self.num_arcs += 1;
        true
    }

    fn remove_arc(&mut self, source: &V, target: &V) -> bool {
        let Some(arcs) = self.outgoing.get_mut(source) else {
            return false;
        };
        let before = arcs.len();
        arcs.retain(|arc| arc.target() != target);
        if arcs.len() == before {
            return false;
        }

        if let Some(predecessors) = self.incoming.get_mut(target) {
            predecessors.retain(|p| p != source);
        }
        self.num_arcs -= 1;
        true
    }

    fn update_arc_label(&mut self, source: &V, target: &V, label: L) -> Result<L> {
        self.outgoing
            .get_mut(source)
            .and_then(|arcs| arcs.iter_mut().find(|arc| arc.target() == target))
            .map(|arc| arc.set_label(label))
            .ok_or(Error::ArcNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_arcs(), 0);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();

        assert!(graph.add_vertex(1));
        assert!(!graph.add_vertex(1));

        assert_eq!(graph.num_vertices(), 1);
        assert!(graph.has_vertex(&1));
    }

    #[test]
    fn test_add_arc_creates_endpoints() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();

        assert!(graph.add_arc(1, 2, ()));

        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_arcs(), 1);
        assert!(graph.has_vertex(&1));
        assert!(graph.has_vertex(&2));
        assert!(graph.has_arc(&1, &2));
        assert!(!graph.has_arc(&2, &1));
    }

    #[test]
    fn test_add_arc_idempotent() {
        let mut graph: AdjacencyDigraph<i32, &str> = AdjacencyDigraph::new();

        assert!(graph.add_arc(1, 2, "first"));
        assert!(!graph.add_arc(1, 2, "second"));

        assert_eq!(graph.num_arcs(), 1);
        // Re-adding leaves the existing label untouched.
        assert_eq!(graph.arc_label(&1, &2), Some(&"first"));
    }

    #[test]
    fn test_update_arc_label() {
        let mut graph: AdjacencyDigraph<i32, &str> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, "old");

        assert_eq!(graph.update_arc_label(&1, &2, "new"), Ok("old"));
        assert_eq!(graph.arc_label(&1, &2), Some(&"new"));

        assert_eq!(
            graph.update_arc_label(&2, &1, "backwards"),
            Err(Error::ArcNotFound)
        );
    }

    #[test]
    fn test_remove_arc() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 3, ());

        assert!(graph.remove_arc(&1, &2));
        assert!(!graph.remove_arc(&1, &2));

        assert_eq!(graph.num_arcs(), 1);
        assert!(!graph.has_arc(&1, &2));
        assert!(graph.has_arc(&2, &3));
        // Endpoints survive arc removal.
        assert!(graph.has_vertex(&1));
        assert!(graph.has_vertex(&2));
    }

    #[test]
    fn test_remove_vertex_removes_touching_arcs() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 3, ());
        graph.add_arc(3, 2, ());
        graph.add_arc(1, 3, ());

        assert!(graph.remove_vertex(&2));
        assert!(!graph.remove_vertex(&2));

        assert!(!graph.has_vertex(&2));
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_arcs(), 1);
        assert!(graph.has_arc(&1, &3));
        assert!(graph.arcs().all(|arc| *arc.source() != 2 && *arc.target() != 2));
    }

    #[test]
    fn test_remove_vertex_with_self_loop() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 1, ());
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 1, ());

        assert_eq!(graph.num_arcs(), 3);
        assert!(graph.remove_vertex(&1));

        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.num_arcs(), 0);
        assert_eq!(graph.predecessors(&2).count(), 0);
    }

    #[test]
    fn test_self_loop() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(5, 5, ());

        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.num_arcs(), 1);
        assert!(graph.has_arc(&5, &5));
        assert_eq!(graph.successors(&5).collect::<Vec<_>>(), vec![&5]);
        assert_eq!(graph.predecessors(&5).collect::<Vec<_>>(), vec![&5]);
    }

    #[test]
    fn test_neighbor_queries_on_absent_vertex() {
        let graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();

        assert_eq!(graph.successors(&9).count(), 0);
        assert_eq!(graph.predecessors(&9).count(), 0);
        assert!(!graph.has_arc(&9, &9));
    }

    #[test]
    fn test_successor_order_follows_insertion() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 4, ());
        graph.add_arc(1, 2, ());
        graph.add_arc(1, 3, ());

        let successors: Vec<i32> = graph.successors(&1).copied().collect();
        assert_eq!(successors, vec![4, 2, 3]);
    }

    #[test]
    fn test_vertices_and_arcs_enumeration() {
        let mut graph: AdjacencyDigraph<i32, char> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, 'x');
        graph.add_arc(2, 3, 'y');
        graph.add_vertex(4);

        let mut vertices: Vec<i32> = graph.vertices().copied().collect();
        vertices.sort_unstable();
        assert_eq!(vertices, vec![1, 2, 3, 4]);

        let mut arcs: Vec<(i32, i32, char)> = graph
            .arcs()
            .map(|arc| (*arc.source(), *arc.target(), *arc.label()))
            .collect();
        arcs.sort_unstable();
        assert_eq!(arcs, vec![(1, 2, 'x'), (2, 3, 'y')]);
    }

    #[test]
    fn test_outgoing_arcs_override() {
        let mut graph: AdjacencyDigraph<i32, i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, 12);
        graph.add_arc(1, 3, 13);

        let mut labels: Vec<i32> = graph.outgoing_arcs(&1).map(|a| *a.label()).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec![12, 13]);
    }
}
