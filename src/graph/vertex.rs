//! Vertex object used by the vertex-adjacency representation
//!
//! A vertex owns its outgoing edges only, as a map from target label to weight.

use super::types::Weight;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A labeled vertex and its outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<L: Hash + Eq> {
    label: L,

    /// Outgoing edges: target -> weight, in insertion order
    edges: IndexMap<L, Weight>,
}

impl<L: Clone + Eq + Hash> Vertex<L> {
    /// Create a vertex with no outgoing edges
    pub fn new(label: L) -> Self {
        Vertex {
            label,
            edges: IndexMap::new(),
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Set the edge to `target`, returning the previous weight (0 if none).
    /// A weight of 0 removes the edge.
    pub fn set_edge(&mut self, target: L, weight: Weight) -> Weight {
        if weight == 0 {
            return self.remove_edge(&target);
        }
        self.edges.insert(target, weight).unwrap_or(0)
    }

    /// Remove the edge to `target`, returning its weight (0 if none)
    pub fn remove_edge(&mut self, target: &L) -> Weight {
        self.edges.shift_remove(target).unwrap_or(0)
    }

    /// Weight of the edge to `target`, or 0 if there is none
    pub fn edge_weight(&self, target: &L) -> Weight {
        self.edges.get(target).copied().unwrap_or(0)
    }

    pub fn has_edge(&self, target: &L) -> bool {
        self.edges.contains_key(target)
    }

    /// Snapshot of the outgoing edges
    pub fn edges(&self) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .map(|(target, &weight)| (target.clone(), weight))
            .collect()
    }

    pub(crate) fn edge_iter(&self) -> impl Iterator<Item = (&L, &Weight)> {
        self.edges.iter()
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

impl<L: fmt::Display + Hash + Eq> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {{", self.label)?;
        for (i, (target, weight)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", target, weight)?;
        }
        write!(f, "}}")
    }
}
