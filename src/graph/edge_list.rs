//! Edge-list graph representation
//!
//! Stores the vertex set plus a flat list of edge records. Edge lookup, update
//! and the `sources`/`targets` queries are linear scans over the edge list.
//! Edges keep their insertion order, which makes the `Display` rendering
//! deterministic.

use super::edge::Edge;
use super::traits::{Graph, GraphError, GraphResult};
use super::types::{VertexPolicy, Weight};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, warn};

/// Graph backed by a vertex set and a list of edges
///
/// Defaults to [`VertexPolicy::Reject`]: `set` fails unless both endpoints
/// were added first.
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L: Hash + Eq> {
    /// Vertex labels, in insertion order
    vertices: IndexSet<L>,

    /// Edge records, in insertion order
    edges: Vec<Edge<L>>,

    policy: VertexPolicy,
}

impl<L> EdgeListGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    /// Create an empty graph that rejects edges to unknown vertices
    pub fn new() -> Self {
        Self::with_policy(VertexPolicy::Reject)
    }

    /// Create an empty graph with an explicit unknown-vertex policy
    pub fn with_policy(policy: VertexPolicy) -> Self {
        EdgeListGraph {
            vertices: IndexSet::new(),
            edges: Vec::new(),
            policy,
        }
    }

    /// Edge records in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> {
        self.edges.iter()
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    /// Make sure both endpoints exist, or fail under the reject policy
    fn admit(&mut self, source: &L, target: &L) -> GraphResult<(), L> {
        match self.policy {
            VertexPolicy::Reject => {
                if !self.vertices.contains(source) {
                    warn!("Rejected edge {:?} -> {:?}: unknown source", source, target);
                    return Err(GraphError::InvalidEdgeSource(source.clone()));
                }
                if !self.vertices.contains(target) {
                    warn!("Rejected edge {:?} -> {:?}: unknown target", source, target);
                    return Err(GraphError::InvalidEdgeTarget(target.clone()));
                }
            }
            VertexPolicy::AutoCreate => {
                for vertex in [source, target] {
                    if self.vertices.insert(vertex.clone()) {
                        debug!("Auto-created vertex {:?}", vertex);
                    }
                }
            }
        }
        Ok(())
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let mut seen = HashSet::new();
            for edge in &self.edges {
                debug_assert!(edge.weight > 0, "stored edge has zero weight");
                debug_assert!(
                    self.vertices.contains(&edge.source),
                    "edge source {:?} is not a vertex",
                    edge.source
                );
                debug_assert!(
                    self.vertices.contains(&edge.target),
                    "edge target {:?} is not a vertex",
                    edge.target
                );
                debug_assert!(
                    seen.insert((&edge.source, &edge.target)),
                    "duplicate edge {:?} -> {:?}",
                    edge.source,
                    edge.target
                );
            }
        }
    }
}

impl<L> Default for EdgeListGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> for EdgeListGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    fn add(&mut self, vertex: L) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        debug!("Added vertex {:?}", vertex);
        self.vertices.insert(vertex);
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> GraphResult<Weight, L> {
        if weight == 0 {
            if self.policy == VertexPolicy::Reject {
                self.admit(&source, &target)?;
            }
            let previous = match self.position(&source, &target) {
                Some(idx) => self.edges.remove(idx).weight,
                None => 0,
            };
            if previous > 0 {
                debug!("Removed edge {:?} -> {:?} (weight {})", source, target, previous);
            }
            self.check_rep();
            return Ok(previous);
        }

        self.admit(&source, &target)?;

        let previous = match self.position(&source, &target) {
            Some(idx) => std::mem::replace(&mut self.edges[idx].weight, weight),
            None => {
                self.edges.push(Edge::new(source.clone(), target.clone(), weight));
                0
            }
        };
        debug!("Set edge {:?} -> {:?} to {} (was {})", source, target, weight, previous);

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.contains(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        self.vertices.shift_remove(vertex);
        debug!(
            "Removed vertex {:?} and {} incident edges",
            vertex,
            before - self.edges.len()
        );

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.ends_at(target))
            .map(|e| (e.source.clone(), e.weight))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.starts_from(source))
            .map(|e| (e.target.clone(), e.weight))
            .collect()
    }

    fn policy(&self) -> VertexPolicy {
        self.policy
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// One line per edge, `"<source> -> <target> [weight=<w>]"`, in insertion order
impl<L: fmt::Display + Hash + Eq> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_abc() -> EdgeListGraph<&'static str> {
        let mut graph = EdgeListGraph::new();
        graph.add("A");
        graph.add("B");
        graph.add("C");
        graph
    }

    #[test]
    fn test_display_empty_graph() {
        let graph: EdgeListGraph<&str> = EdgeListGraph::new();
        assert_eq!(graph.to_string(), "");
    }

    #[test]
    fn test_display_single_edge() {
        let mut graph = graph_abc();
        graph.set("A", "B", 5).unwrap();
        assert_eq!(graph.to_string(), "A -> B [weight=5]\n");
    }

    #[test]
    fn test_display_keeps_insertion_order() {
        let mut graph = graph_abc();
        graph.set("B", "C", 10).unwrap();
        graph.set("A", "B", 5).unwrap();
        graph.set("B", "C", 3).unwrap();

        assert_eq!(graph.to_string(), "B -> C [weight=3]\nA -> B [weight=5]\n");
    }

    #[test]
    fn test_set_rejects_unknown_vertices() {
        let mut graph: EdgeListGraph<&str> = EdgeListGraph::new();

        assert_eq!(graph.set("A", "B", 5), Err(GraphError::InvalidEdgeSource("A")));
        graph.add("A");
        assert_eq!(graph.set("A", "B", 5), Err(GraphError::InvalidEdgeTarget("B")));
        assert!(graph.targets(&"A").is_empty());
        assert_eq!(graph.vertices(), HashSet::from(["A"]));
    }

    #[test]
    fn test_zero_weight_on_unknown_vertices_is_rejected() {
        let mut graph: EdgeListGraph<&str> = EdgeListGraph::new();
        assert_eq!(graph.set("X", "Y", 0), Err(GraphError::InvalidEdgeSource("X")));
        assert!(graph.vertices().is_empty());

        graph.add("X");
        assert_eq!(graph.set("X", "Y", 0), Err(GraphError::InvalidEdgeTarget("Y")));
        assert_eq!(graph.vertices(), HashSet::from(["X"]));
    }

    #[test]
    fn test_zero_weight_on_unknown_vertices_with_auto_create() {
        let mut graph = EdgeListGraph::with_policy(VertexPolicy::AutoCreate);
        assert_eq!(graph.set("X", "Y", 0), Ok(0));
        assert!(graph.vertices().is_empty());
    }

    #[test]
    fn test_auto_create_policy() {
        let mut graph = EdgeListGraph::with_policy(VertexPolicy::AutoCreate);
        assert_eq!(graph.set("X", "Y", 5), Ok(0));
        assert_eq!(graph.vertices(), HashSet::from(["X", "Y"]));
        assert_eq!(graph.policy(), VertexPolicy::AutoCreate);
    }

    #[test]
    fn test_update_keeps_single_record() {
        let mut graph = graph_abc();
        graph.set("A", "B", 5).unwrap();
        assert_eq!(graph.set("A", "B", 10), Ok(5));

        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edges().next().unwrap();
        assert_eq!(edge, &Edge::new("A", "B", 10));
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph = graph_abc();
        graph.set("A", "B", 5).unwrap();
        graph.set("B", "C", 7).unwrap();
        graph.set("C", "A", 9).unwrap();

        assert!(graph.remove(&"B"));
        assert!(!graph.remove(&"B"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.to_string(), "C -> A [weight=9]\n");
    }
}
