//! Weakly connected components.
//!
//! A weakly connected component is a connected component of the graph with
//! arc directions ignored. Computing them is a straight union-find sweep:
//! seed the structure with every vertex, then union the endpoints of every
//! arc.

use crate::{Digraph, DisjointSet};

/// Computes the weakly-connected components of `graph`.
///
/// Returns a [`DisjointSet`] over all vertices in which the endpoints of
/// every arc have been unioned - arcs are treated as undirected edges for
/// this purpose only. Isolated vertices form singleton components.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::{algorithms, prelude::*};
///
/// let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
/// graph.add_arc(1, 2, ());
/// graph.add_arc(2, 3, ());
/// graph.add_arc(4, 5, ());
///
/// let components = algorithms::weakly_connected_components(&graph);
/// assert_eq!(components.number_of_subsets(), 2);
/// assert!(components.same_subset(&1, &3));
/// assert!(!components.same_subset(&3, &4));
/// ```
#[must_use]
pub fn weakly_connected_components<G: Digraph>(graph: &G) -> DisjointSet<G::Vertex> {
    let mut components = DisjointSet::with_capacity(graph.num_vertices());
    components.add_all(graph.vertices().cloned());
    for arc in graph.arcs() {
        components.union(arc.source(), arc.target());
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyDigraph, DigraphMut, MatrixDigraph};

    #[test]
    fn test_weak_components_empty_graph() {
        let graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        let components = weakly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 0);
    }

    #[test]
    fn test_weak_components_two_chains() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 3, ());
        graph.add_arc(4, 5, ());

        let components = weakly_connected_components(&graph);

        assert_eq!(components.number_of_subsets(), 2);
        assert!(components.same_subset(&1, &3));
        assert!(components.same_subset(&4, &5));
        assert!(!components.same_subset(&1, &4));
    }

    #[test]
    fn test_weak_components_ignore_direction() {
        // 1 -> 2 and 3 -> 2: weakly all connected.
        let mut graph: MatrixDigraph<i32> = MatrixDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(3, 2, ());

        let components = weakly_connected_components(&graph);

        assert_eq!(components.number_of_subsets(), 1);
        assert!(components.same_subset(&1, &3));
    }

    #[test]
    fn test_weak_components_isolated_vertices() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_arc(3, 4, ());

        let components = weakly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 3);
    }

    #[test]
    fn test_weak_components_self_loop() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 1, ());

        let components = weakly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 1);
    }
}
