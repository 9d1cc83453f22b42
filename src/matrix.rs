//! Dense-matrix digraph representation.
//!
//! This module provides [`MatrixDigraph`], the dense representation: a
//! bijection between vertices and a contiguous index range, and an n-by-n
//! matrix of optional labels whose cell (i, j) records the arc from
//! vertex i to vertex j.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{Arc, Digraph, DigraphMut, Error, Result};

/// A digraph backed by a dense adjacency matrix.
///
/// Vertices are assigned dense indices in insertion order; the matrix cell
/// (i, j) holds `Some(label)` exactly when the arc (vertex_i, vertex_j) is
/// present. Arc existence checks, insertion and removal are O(1) after the
/// index lookup; neighbor enumeration scans a full row or column and is
/// O(n). Use this representation when the graph is dense or arc existence
/// is checked far more often than neighbors are enumerated.
///
/// # Index Stability
///
/// A vertex's index (see [`vertex_index`](MatrixDigraph::vertex_index)) is
/// stable until a removal: [`remove_vertex`](DigraphMut::remove_vertex)
/// swaps the last row and column into the vacated slot to keep the index
/// range dense, so it **invalidates any externally cached index**. Removal
/// is also more expensive here than in the adjacency representation.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::prelude::*;
///
/// let mut graph: MatrixDigraph<u16> = MatrixDigraph::new();
/// for i in 0..100 {
///     for j in 0..100 {
///         if i != j {
///             graph.add_arc(i, j, ());
///         }
///     }
/// }
///
/// // Constant-time membership probes over a dense topology.
/// assert!(graph.has_arc(&17, &83));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixDigraph<V, L = ()> {
    /// Index to vertex (dense, insertion order until a removal compacts it).
    vertices: Vec<V>,
    /// Vertex to index.
    indices: HashMap<V, usize>,
    /// n-by-n matrix; `cells[i][j]` is the label of arc (vertex_i, vertex_j).
    cells: Vec<Vec<Option<L>>>,
    /// Count of distinct (source, target) pairs present.
    num_arcs: usize,
}

impl<V: Eq + Hash + Clone, L: Clone> MatrixDigraph<V, L> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        MatrixDigraph {
            vertices: Vec::new(),
            indices: HashMap::new(),
            cells: Vec::new(),
            num_arcs: 0,
        }
    }

    /// Creates a new empty graph with capacity pre-allocated for
    /// approximately `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        MatrixDigraph {
            vertices: Vec::with_capacity(vertices),
            indices: HashMap::with_capacity(vertices),
            cells: Vec::with_capacity(vertices),
            num_arcs: 0,
        }
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the dense matrix index of `vertex`.
    ///
    /// This is the low-level accessor that bypasses the usual
    /// absence-is-empty convention of the contract operations: asking for
    /// the index of a vertex that is not present is a precondition
    /// violation.
    ///
    /// Cached indices are invalidated by
    /// [`remove_vertex`](DigraphMut::remove_vertex), which compacts the
    /// index range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] when `vertex` is not present.
    pub fn vertex_index(&self, vertex: &V) -> Result<usize> {
        self.indices
            .get(vertex)
            .copied()
            .ok_or(Error::VertexNotFound)
    }

    /// Returns the vertex at the given dense index, or `None` if the index
    /// is out of range.
    #[must_use]
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }
}

impl<V: Eq + Hash + Clone, L: Clone> Default for MatrixDigraph<V, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone, L: Clone> Digraph for MatrixDigraph<V, L> {
    type Vertex = V;
    type Label = L;

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    fn has_arc(&self, source: &V, target: &V) -> bool {
        match (self.indices.get(source), self.indices.get(target)) {
            (Some(&i), Some(&j)) => self.cells[i][j].is_some(),
            _ => false,
        }
    }

    fn arc_label(&self, source: &V, target: &V) -> Option<&L> {
        let i = *self.indices.get(source)?;
        let j = *self.indices.get(target)?;
        self.cells[i][j].as_ref()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    fn arcs(&self) -> impl Iterator<Item = Arc<V, L>> {
        self.cells.iter().enumerate().flat_map(move |(i, row)| {
            row.iter().enumerate().filter_map(move |(j, cell)| {
                cell.as_ref().map(|label| {
                    Arc::new(
                        self.vertices[i].clone(),
                        self.vertices[j].clone(),
                        label.clone(),
                    )
                })
            })
        })
    }

    fn successors(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.indices.get(vertex).into_iter().flat_map(move |&i| {
            self.cells[i]
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_some())
                .map(move |(j, _)| &self.vertices[j])
        })
    }

    fn predecessors(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.indices.get(vertex).into_iter().flat_map(move |&j| {
            self.cells
                .iter()
                .enumerate()
                .filter(move |(_, row)| row[j].is_some())
                .map(move |(i, _)| &self.vertices[i])
        })
    }
}

impl<V: Eq + Hash + Clone, L: Clone> DigraphMut for MatrixDigraph<V, L> {
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_key(&vertex) {
            return false;
        }
        let index = self.vertices.len();
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);

        // Grow the matrix by one column, then one row.
        for row in &mut self.cells {
            row.push(None);
        }
        self.cells.push(vec![None; index + 1]);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(&removed) = self.indices.get(vertex) else {
            return false;
        };

        // Account for every arc touching the vertex; a self-loop sits in
        // both the row and the column but is one arc.
        let outgoing = self.cells[removed].iter().filter(|c| c.is_some()).count();
        let incoming = self
            .cells
            .iter()
            .filter(|row| row[removed].is_some())
            .count();
        let self_loop = usize::from(self.cells[removed][removed].is_some());
        self.num_arcs -= outgoing + incoming - self_loop;

        // Swap the last row and column into the vacated slot, shrinking the
        // matrix by one in each dimension. The vertex that held the last
        // index takes over the removed index.
        self.cells.swap_remove(removed);
        for row in &mut self.cells {
            row.swap_remove(removed);
        }
        self.indices.remove(vertex);
        self.vertices.swap_remove(removed);
        if removed < self.vertices.len() {
            self.indices.insert(self.vertices[removed].clone(), removed);
        }
        true
    }

    fn add_arc(&mut self, source: V, target: V, label: L) -> bool {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        let i = self.indices[&source];
        let j = self.indices[&target];

        if self.cells[i][j].is_some() {
            return false;
        }
        self.cells[i][j] = Some(label);
        self.num_arcs += 1;
        true
    }

    fn remove_arc(&mut self, source: &V, target: &V) -> bool {
        let (i, j) = match (self.indices.get(source), self.indices.get(target)) {
            (Some(&i), Some(&j)) => (i, j),
            _ => return false,
        };
        if self.cells[i][j].take().is_some() {
            self.num_arcs -= 1;
            true
        } else {
            false
        }
    }

    fn update_arc_label(&mut self, source: &V, target: &V, label: L) -> Result<L> {
        let (i, j) = match (self.indices.get(source), self.indices.get(target)) {
            (Some(&i), Some(&j)) => (i, j),
            _ => return Err(Error::ArcNotFound),
        };
        match self.cells[i][j].as_mut() {
            Some(cell) => Ok(std::mem::replace(cell, label)),
            None => Err(Error::ArcNotFound),
        }
    }
}
