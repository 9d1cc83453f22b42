//! Disjoint-set (union-find) structure over value-keyed elements.
//!
//! This module provides [`DisjointSet`], the partition structure backing
//! the connectivity analyses in [`crate::algorithms`]. A fresh instance is
//! produced per connectivity query; it is a derived, disposable artifact,
//! not part of any graph's persistent state.

use std::collections::HashMap;
use std::hash::Hash;

/// A partition of a universe of elements into disjoint subsets.
///
/// Elements are compared by value, like graph vertices. Each subset has a
/// representative element; [`union`](DisjointSet::union) merges two
/// subsets, [`same_subset`](DisjointSet::same_subset) asks whether two
/// elements currently share one, and
/// [`to_partitions`](DisjointSet::to_partitions) enumerates the subsets.
///
/// # Strategy
///
/// Union by size with full path compression applied during unions. To keep
/// read-only queries on `&self`, they walk the parent chain without
/// compressing; amortized costs stay near-constant because every union
/// flattens the chains it touches.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::DisjointSet;
///
/// let mut sets: DisjointSet<&str> = DisjointSet::new();
/// sets.add_all(["a", "b", "c", "d"]);
/// sets.union(&"a", &"b");
/// sets.union(&"b", &"c");
///
/// assert_eq!(sets.number_of_subsets(), 2);
/// assert!(sets.same_subset(&"a", &"c"));
/// assert!(!sets.same_subset(&"a", &"d"));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    /// Element to slot index.
    indices: HashMap<V, usize>,
    /// Slot index to element.
    elements: Vec<V>,
    /// Parent slot per slot; a root is its own parent.
    parent: Vec<usize>,
    /// Subset size per root slot (meaningful for roots only).
    size: Vec<usize>,
    /// Current number of disjoint subsets.
    subsets: usize,
}

impl<V: Eq + Hash + Clone> DisjointSet<V> {
    /// Creates a new empty structure.
    #[must_use]
    pub fn new() -> Self {
        DisjointSet {
            indices: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            subsets: 0,
        }
    }

    /// Creates a new empty structure with capacity pre-allocated for
    /// approximately `elements` elements.
    #[must_use]
    pub fn with_capacity(elements: usize) -> Self {
        DisjointSet {
            indices: HashMap::with_capacity(elements),
            elements: Vec::with_capacity(elements),
            parent: Vec::with_capacity(elements),
            size: Vec::with_capacity(elements),
            subsets: 0,
        }
    }

    /// Adds `element` as a new singleton subset.
    ///
    /// Returns `true` if the element was inserted, `false` if it was
    /// already present (no-op).
    pub fn add(&mut self, element: V) -> bool {
        if self.indices.contains_key(&element) {
            return false;
        }
        let slot = self.elements.len();
        self.indices.insert(element.clone(), slot);
        self.elements.push(element);
        self.parent.push(slot);
        self.size.push(1);
        self.subsets += 1;
        true
    }

    /// Adds every element of `elements`, skipping those already present.
    pub fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = V>,
    {
        for element in elements {
            self.add(element);
        }
    }

    /// Merges the subsets containing `u` and `v`.
    ///
    /// Elements not yet present are added first, mirroring how arc
    /// insertion implicitly creates endpoints. Returns `true` if two
    /// distinct subsets were merged, `false` if `u` and `v` already shared
    /// one.
    pub fn union(&mut self, u: &V, v: &V) -> bool {
        if !self.indices.contains_key(u) {
            self.add(u.clone());
        }
        if !self.indices.contains_key(v) {
            self.add(v.clone());
        }
        let slot_u = self.indices[u];
        let slot_v = self.indices[v];
        let root_u = self.root_of(slot_u);
        let root_v = self.root_of(slot_v);
        self.compress(slot_u, root_u);
        self.compress(slot_v, root_v);

        if root_u == root_v {
            return false;
        }
        let (keep, absorb) = if self.size[root_u] >= self.size[root_v] {
            (root_u, root_v)
        } else {
            (root_v, root_u)
        };
        self.parent[absorb] = keep;
        self.size[keep] += self.size[absorb];
        self.subsets -= 1;
        true
    }

    /// Returns the representative of the subset containing `element`, or
    /// `None` if the element is not present.
    #[must_use]
    pub fn find(&self, element: &V) -> Option<&V> {
        let slot = *self.indices.get(element)?;
        Some(&self.elements[self.root_of(slot)])
    }

    /// Returns `true` if `u` and `v` are both present and share a subset.
    #[must_use]
    pub fn same_subset(&self, u: &V, v: &V) -> bool {
        match (self.indices.get(u), self.indices.get(v)) {
            (Some(&slot_u), Some(&slot_v)) => self.root_of(slot_u) == self.root_of(slot_v),
            _ => false,
        }
    }

    /// Returns `true` if `element` is present in the universe.
    #[must_use]
    pub fn contains(&self, element: &V) -> bool {
        self.indices.contains_key(element)
    }

    /// Returns the current number of disjoint subsets.
    #[must_use]
    pub fn number_of_subsets(&self) -> usize {
        self.subsets
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Enumerates the current subsets as groups of elements.
    ///
    /// The order of groups and of elements within a group is unspecified.
    #[must_use]
    pub fn to_partitions(&self) -> Vec<Vec<V>> {
        let mut groups: HashMap<usize, Vec<V>> = HashMap::new();
        for (slot, element) in self.elements.iter().enumerate() {
            groups
                .entry(self.root_of(slot))
                .or_default()
                .push(element.clone());
        }
        groups.into_values().collect()
    }

    /// Walks to the root of `slot` without compressing.
    fn root_of(&self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            slot = self.parent[slot];
        }
        slot
    }

    /// Points every slot on the chain from `slot` directly at `root`.
    fn compress(&mut self, mut slot: usize, root: usize) {
        while self.parent[slot] != root {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }
    }
}

impl<V: Eq + Hash + Clone> Default for DisjointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}
