//! The graph contract shared by every representation
//!
//! A graph is a set of uniquely labeled vertices plus directed edges carrying
//! a positive weight. Every edge endpoint is a vertex of the graph, and at most
//! one edge exists per ordered `(source, target)` pair. Setting a weight of 0
//! deletes the edge, so 0 is never an observable edge weight.
//!
//! All query results are owned snapshots; mutating them never affects the graph.

use super::types::{VertexPolicy, Weight};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<L: Debug> {
    #[error("Invalid edge: source vertex {0:?} does not exist")]
    InvalidEdgeSource(L),

    #[error("Invalid edge: target vertex {0:?} does not exist")]
    InvalidEdgeTarget(L),
}

pub type GraphResult<T, L> = Result<T, GraphError<L>>;

/// Mutable, directed, weighted graph over vertex labels of type `L`
pub trait Graph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Add a vertex. Returns false if the label was already present.
    fn add(&mut self, vertex: L) -> bool;

    /// Add, update or remove the edge `source -> target`.
    ///
    /// A non-zero `weight` inserts or updates the edge; zero removes it.
    /// Returns the previous weight, or 0 if there was no such edge.
    ///
    /// When an endpoint is missing, the graph's [`VertexPolicy`] decides.
    /// `Reject` fails with [`GraphError::InvalidEdgeSource`] or
    /// [`GraphError::InvalidEdgeTarget`] (source checked first) whatever the
    /// weight, leaving the graph unchanged. `AutoCreate` adds the missing
    /// vertices for a non-zero weight; a zero weight creates nothing and
    /// returns 0.
    fn set(&mut self, source: L, target: L, weight: Weight) -> GraphResult<Weight, L>;

    /// Remove a vertex and every edge touching it.
    /// Returns false if the vertex was not present.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Snapshot of all vertex labels
    fn vertices(&self) -> HashSet<L>;

    /// Vertices with an edge into `target`, mapped to that edge's weight
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// Vertices with an edge out of `source`, mapped to that edge's weight
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// Policy applied by `set` to unknown endpoints
    fn policy(&self) -> VertexPolicy;

    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }

    /// Weight of `source -> target`, or 0 if there is no such edge
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn edge_count(&self) -> usize {
        self.vertices()
            .iter()
            .map(|vertex| self.targets(vertex).len())
            .sum()
    }
}
