//! The arc (directed edge) record.
//!
//! This module provides [`Arc`], the value type representing a directed
//! edge between two vertices. An arc's identity is its (source, target)
//! pair; the label rides along and may be replaced in place without
//! changing which arc it is.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A directed edge from a source vertex to a target vertex, carrying a label.
///
/// `Arc<V, L>` is an ordered pair with an attached label of type `L`. For
/// unlabeled graphs use `L = ()` (the default) and construct arcs with
/// [`Arc::unlabeled`].
///
/// # Identity
///
/// Equality and hashing consider only the (source, target) pair. Two arcs
/// with the same endpoints but different labels compare equal - the label is
/// payload, not identity. Replacing the label through [`set_label`](Arc::set_label)
/// or [`label_mut`](Arc::label_mut) therefore never affects identity.
///
/// # Examples
///
/// ```rust,ignore
/// use arcgraph::Arc;
///
/// let a = Arc::new(1, 2, "first");
/// let b = Arc::new(1, 2, "second");
///
/// // Same endpoints, same arc - labels do not participate in identity.
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Arc<V, L = ()> {
    /// Source vertex of the arc
    source: V,
    /// Target vertex of the arc
    target: V,
    /// User-provided label
    label: L,
}

impl<V, L> Arc<V, L> {
    /// Creates a new arc from `source` to `target` carrying `label`.
    #[must_use]
    pub const fn new(source: V, target: V, label: L) -> Self {
        Arc {
            source,
            target,
            label,
        }
    }

    /// Returns the source vertex of this arc.
    #[must_use]
    #[inline]
    pub const fn source(&self) -> &V {
        &self.source
    }

    /// Returns the target vertex of this arc.
    #[must_use]
    #[inline]
    pub const fn target(&self) -> &V {
        &self.target
    }

    /// Returns the source and target as a pair.
    #[must_use]
    #[inline]
    pub const fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.target)
    }

    /// Returns a reference to the label of this arc.
    #[must_use]
    #[inline]
    pub const fn label(&self) -> &L {
        &self.label
    }

    /// Returns a mutable reference to the label of this arc.
    ///
    /// The label may be mutated freely; arc identity is the endpoint pair
    /// and is unaffected.
    #[inline]
    pub fn label_mut(&mut self) -> &mut L {
        &mut self.label
    }

    /// Replaces the label in place, returning the previous one.
    pub fn set_label(&mut self, label: L) -> L {
        std::mem::replace(&mut self.label, label)
    }

    /// Consumes the arc and returns its parts: source, target, label.
    #[must_use]
    pub fn into_parts(self) -> (V, V, L) {
        (self.source, self.target, self.label)
    }
}

impl<V> Arc<V, ()> {
    /// Creates an unlabeled arc from `source` to `target`.
    #[must_use]
    pub const fn unlabeled(source: V, target: V) -> Self {
        Arc::new(source, target, ())
    }
}

// Identity is the (source, target) pair; labels are payload.
impl<V: PartialEq, L> PartialEq for Arc<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl<V: Eq, L> Eq for Arc<V, L> {}

impl<V: Hash, L> Hash for Arc<V, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl<V: fmt::Display, L> fmt::Display for Arc<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
