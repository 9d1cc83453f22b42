//! Strongly connected components via Tarjan's algorithm.
//!
//! A strongly connected component (SCC) is a maximal set of vertices that
//! are all mutually reachable. Tarjan's algorithm finds every SCC in a
//! single depth-first pass by tracking, for each vertex, its discovery
//! index and the lowest discovery index reachable through its DFS subtree
//! plus back edges (the "low-link"). A vertex whose low-link equals its own
//! index roots a completed component.
//!
//! The implementation here drives the DFS with an explicit work stack of
//! (vertex, next-successor-position) frames instead of native recursion:
//! a path graph a few tens of thousands of vertices deep would otherwise
//! overflow the call stack. The frame simulation preserves the recursive
//! formulation's exact index and low-link update order.
//!
//! All per-run state lives in a local context created for the call, so a
//! shared read-only graph can be analyzed freely.

use std::collections::HashMap;

use crate::{Digraph, DisjointSet};

/// Computes the strongly connected components of `graph`.
///
/// Returns a [`DisjointSet`] over all vertices in which exactly the
/// mutually reachable vertices share a subset;
/// [`to_partitions`](DisjointSet::to_partitions) yields the components
/// themselves and [`number_of_subsets`](DisjointSet::number_of_subsets)
/// counts them.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) (the run snapshots adjacency into dense positions)
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::{algorithms, prelude::*};
///
/// // 1 -> 2 -> 3 -> 1 is a cycle; 4 hangs off it.
/// let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
/// graph.add_arc(1, 2, ());
/// graph.add_arc(2, 3, ());
/// graph.add_arc(3, 1, ());
/// graph.add_arc(3, 4, ());
///
/// let sccs = algorithms::strongly_connected_components(&graph);
/// assert_eq!(sccs.number_of_subsets(), 2);
/// assert!(sccs.same_subset(&1, &3));
/// assert!(!sccs.same_subset(&3, &4));
/// ```
#[must_use]
pub fn strongly_connected_components<G: Digraph>(graph: &G) -> DisjointSet<G::Vertex> {
    let order: Vec<G::Vertex> = graph.vertices().cloned().collect();
    let mut components = DisjointSet::with_capacity(order.len());
    components.add_all(order.iter().cloned());
    if order.is_empty() {
        return components;
    }

    // Snapshot the topology into dense positions so frames hold plain
    // integers and successor lists are indexable mid-visit.
    let position: HashMap<G::Vertex, usize> = order
        .iter()
        .enumerate()
        .map(|(index, vertex)| (vertex.clone(), index))
        .collect();
    let adjacency: Vec<Vec<usize>> = order
        .iter()
        .map(|vertex| {
            graph
                .successors(vertex)
                .filter_map(|successor| position.get(successor).copied())
                .collect()
        })
        .collect();

    let mut state = TarjanState::new(order.len());
    for root in 0..order.len() {
        if state.index[root].is_none() {
            state.visit(root, &adjacency, &order, &mut components);
        }
    }

    components
}

/// Per-run state for Tarjan's algorithm, local to one analysis call.
struct TarjanState {
    /// Discovery index per vertex position (None if not yet visited).
    index: Vec<Option<usize>>,
    /// Lowest discovery index reachable from each vertex position.
    lowlink: Vec<usize>,
    /// Whether a vertex position is currently on the component stack.
    on_stack: Vec<bool>,
    /// The component stack: vertices of the SCCs still being assembled.
    stack: Vec<usize>,
    /// Next discovery index to hand out.
    current_index: usize,
}

/// One simulated recursion frame: a vertex and how far through its
/// successor list the visit has advanced.
struct Frame {
    vertex: usize,
    next_successor: usize,
}

impl TarjanState {
    fn new(count: usize) -> Self {
        TarjanState {
            index: vec![None; count],
            lowlink: vec![0; count],
            on_stack: vec![false; count],
            stack: Vec::new(),
            current_index: 0,
        }
    }

    /// First entry into a vertex: assign its discovery index and low-link,
    /// and place it on the component stack.
    fn open(&mut self, vertex: usize) {
        self.index[vertex] = Some(self.current_index);
        self.lowlink[vertex] = self.current_index;
        self.current_index += 1;
        self.stack.push(vertex);
        self.on_stack[vertex] = true;
    }

    /// Runs the depth-first visit from `root` on an explicit work stack.
    fn visit<V: Eq + std::hash::Hash + Clone>(
        &mut self,
        root: usize,
        adjacency: &[Vec<usize>],
        order: &[V],
        components: &mut DisjointSet<V>,
    ) {
        let mut work = vec![Frame {
            vertex: root,
            next_successor: 0,
        }];
        self.open(root);

        while let Some(frame) = work.last_mut() {
            let vertex = frame.vertex;

            // Resume scanning this vertex's successors where we left off.
            let mut descend_into = None;
            while frame.next_successor < adjacency[vertex].len() {
                let successor = adjacency[vertex][frame.next_successor];
                frame.next_successor += 1;

                if self.index[successor].is_none() {
                    // Unvisited: simulate the recursive call.
                    descend_into = Some(successor);
                    break;
                } else if self.on_stack[successor] {
                    // On the stack: part of the component being assembled.
                    if let Some(successor_index) = self.index[successor] {
                        self.lowlink[vertex] = self.lowlink[vertex].min(successor_index);
                    }
                }
                // Visited and off the stack: an already-closed component.
            }

            if let Some(successor) = descend_into {
                self.open(successor);
                work.push(Frame {
                    vertex: successor,
                    next_successor: 0,
                });
                continue;
            }

            // Every successor handled: this frame returns.
            work.pop();

            if self.index[vertex] == Some(self.lowlink[vertex]) {
                // Root of a completed component: pop the stack down to and
                // including this vertex, grouping as we go.
                loop {
                    let member = self.stack.pop().unwrap();
                    self.on_stack[member] = false;
                    components.union(&order[vertex], &order[member]);
                    if member == vertex {
                        break;
                    }
                }
            }

            // The simulated call returns: fold our low-link into the caller.
            if let Some(parent) = work.last() {
                self.lowlink[parent.vertex] = self.lowlink[parent.vertex].min(self.lowlink[vertex]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyDigraph, DigraphMut, MatrixDigraph};
    use std::collections::HashSet;

    fn partitions_of(components: &DisjointSet<i32>) -> HashSet<Vec<i32>> {
        components
            .to_partitions()
            .into_iter()
            .map(|mut group| {
                group.sort_unstable();
                group
            })
            .collect()
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 0);
        assert!(components.is_empty());
    }

    #[test]
    fn test_scc_single_vertex() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_vertex(1);

        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 1);
    }

    #[test]
    fn test_scc_self_loop_is_singleton() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 1, ());

        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 1);
    }

    #[test]
    fn test_scc_acyclic_chain_is_all_singletons() {
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 3, ());
        graph.add_arc(4, 5, ());

        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 5);
        assert!(!components.same_subset(&1, &2));
    }

    #[test]
    fn test_scc_cycle_plus_tail() {
        // 1 -> 2 -> 3 -> 1, 3 -> 4, 4 -> 5 -> 6 -> 5
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 3, ());
        graph.add_arc(3, 1, ());
        graph.add_arc(3, 4, ());
        graph.add_arc(4, 5, ());
        graph.add_arc(5, 6, ());
        graph.add_arc(6, 5, ());

        let components = strongly_connected_components(&graph);

        assert_eq!(components.number_of_subsets(), 3);
        let expected: HashSet<Vec<i32>> =
            [vec![1, 2, 3], vec![4], vec![5, 6]].into_iter().collect();
        assert_eq!(partitions_of(&components), expected);
    }

    #[test]
    fn test_scc_two_cycles_joined_one_way() {
        // 1 <-> 2 -> 3 <-> 4: the joining arc does not merge the cycles.
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 1, ());
        graph.add_arc(2, 3, ());
        graph.add_arc(3, 4, ());
        graph.add_arc(4, 3, ());

        let components = strongly_connected_components(&graph);

        assert_eq!(components.number_of_subsets(), 2);
        assert!(components.same_subset(&1, &2));
        assert!(components.same_subset(&3, &4));
        assert!(!components.same_subset(&2, &3));
    }

    #[test]
    fn test_scc_full_cycle_on_matrix() {
        let mut graph: MatrixDigraph<usize> = MatrixDigraph::new();
        for i in 0..100 {
            graph.add_arc(i, (i + 1) % 100, ());
        }

        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 1);
        assert!(components.same_subset(&0, &99));
    }

    #[test]
    fn test_scc_cross_edges_between_closed_components() {
        // 2 <-> 3 closes before 1 is done; the edge 1 -> 3 into the closed
        // component must not drag 1 into it.
        let mut graph: AdjacencyDigraph<i32> = AdjacencyDigraph::new();
        graph.add_arc(1, 2, ());
        graph.add_arc(2, 3, ());
        graph.add_arc(3, 2, ());
        graph.add_arc(1, 3, ());

        let components = strongly_connected_components(&graph);

        assert_eq!(components.number_of_subsets(), 2);
        assert!(components.same_subset(&2, &3));
        assert!(!components.same_subset(&1, &2));
    }

    #[test]
    fn test_scc_deep_path_does_not_overflow() {
        // A 10k-vertex path exercises the explicit work stack; native
        // recursion would be at risk here.
        let mut graph: AdjacencyDigraph<u32> = AdjacencyDigraph::new();
        for i in 0..10_000u32 {
            graph.add_arc(i, i + 1, ());
        }

        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 10_001);
    }

    #[test]
    fn test_scc_deep_cycle_is_one_component() {
        let mut graph: AdjacencyDigraph<u32> = AdjacencyDigraph::new();
        for i in 0..10_000u32 {
            graph.add_arc(i, (i + 1) % 10_000, ());
        }

        let components = strongly_connected_components(&graph);
        assert_eq!(components.number_of_subsets(), 1);
    }
}
