//! Vertex-adjacency graph representation
//!
//! Each vertex owns a map of its outgoing edges. `targets` reads a single
//! vertex's map; `sources` has to scan every vertex because incoming edges are
//! not indexed. Removing a vertex also strips the edges other vertices hold
//! towards it.

use super::traits::{Graph, GraphError, GraphResult};
use super::types::{VertexPolicy, Weight};
use super::vertex::Vertex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, warn};

/// Graph backed by a list of vertex objects with outgoing adjacency maps
///
/// Defaults to [`VertexPolicy::AutoCreate`]: `set` with a positive weight
/// never fails, adding whichever endpoints are missing.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L: Hash + Eq> {
    /// Vertices, in insertion order
    vertices: Vec<Vertex<L>>,

    policy: VertexPolicy,
}

impl<L> AdjacencyGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    /// Create an empty graph that auto-creates unknown vertices
    pub fn new() -> Self {
        Self::with_policy(VertexPolicy::AutoCreate)
    }

    /// Create an empty graph with an explicit unknown-vertex policy
    pub fn with_policy(policy: VertexPolicy) -> Self {
        AdjacencyGraph {
            vertices: Vec::new(),
            policy,
        }
    }

    /// Look up a vertex object by label
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.iter().find(|v| v.label() == label)
    }

    fn index_of(&self, label: &L) -> Option<usize> {
        self.vertices.iter().position(|v| v.label() == label)
    }

    /// Index of the source vertex, creating missing endpoints or failing
    /// under the reject policy
    fn admit(&mut self, source: &L, target: &L) -> GraphResult<usize, L> {
        let source_idx = self.index_of(source);
        let target_known = self.index_of(target).is_some();

        match self.policy {
            VertexPolicy::Reject => {
                let Some(idx) = source_idx else {
                    warn!("Rejected edge {:?} -> {:?}: unknown source", source, target);
                    return Err(GraphError::InvalidEdgeSource(source.clone()));
                };
                if !target_known {
                    warn!("Rejected edge {:?} -> {:?}: unknown target", source, target);
                    return Err(GraphError::InvalidEdgeTarget(target.clone()));
                }
                Ok(idx)
            }
            VertexPolicy::AutoCreate => {
                let idx = match source_idx {
                    Some(idx) => idx,
                    None => {
                        debug!("Auto-created vertex {:?}", source);
                        self.vertices.push(Vertex::new(source.clone()));
                        self.vertices.len() - 1
                    }
                };
                if !target_known && target != source {
                    debug!("Auto-created vertex {:?}", target);
                    self.vertices.push(Vertex::new(target.clone()));
                }
                Ok(idx)
            }
        }
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            let labels: HashSet<&L> = self.vertices.iter().map(|v| v.label()).collect();
            debug_assert_eq!(labels.len(), self.vertices.len(), "duplicate vertex label");
            for vertex in &self.vertices {
                for (target, &weight) in vertex.edge_iter() {
                    debug_assert!(weight > 0, "stored edge has zero weight");
                    debug_assert!(
                        labels.contains(target),
                        "edge target {:?} is not a vertex",
                        target
                    );
                }
            }
        }
    }
}

impl<L> Default for AdjacencyGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> for AdjacencyGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    fn add(&mut self, vertex: L) -> bool {
        if self.index_of(&vertex).is_some() {
            return false;
        }
        debug!("Added vertex {:?}", vertex);
        self.vertices.push(Vertex::new(vertex));
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> GraphResult<Weight, L> {
        if weight == 0 {
            if self.policy == VertexPolicy::Reject {
                self.admit(&source, &target)?;
            }
            let previous = match self.index_of(&source) {
                Some(idx) => self.vertices[idx].remove_edge(&target),
                None => 0,
            };
            if previous > 0 {
                debug!("Removed edge {:?} -> {:?} (weight {})", source, target, previous);
            }
            self.check_rep();
            return Ok(previous);
        }

        let idx = self.admit(&source, &target)?;
        let previous = self.vertices[idx].set_edge(target.clone(), weight);
        debug!("Set edge {:?} -> {:?} to {} (was {})", source, target, weight, previous);

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(idx) = self.index_of(vertex) else {
            return false;
        };

        let removed = self.vertices.remove(idx);
        let mut incoming = 0;
        for other in &mut self.vertices {
            if other.remove_edge(vertex) > 0 {
                incoming += 1;
            }
        }
        debug!(
            "Removed vertex {:?} with {} outgoing and {} incoming edges",
            vertex,
            removed.out_degree(),
            incoming
        );

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().map(|v| v.label().clone()).collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.vertices
            .iter()
            .filter_map(|v| {
                let weight = v.edge_weight(target);
                (weight > 0).then(|| (v.label().clone(), weight))
            })
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.vertex(source).map(Vertex::edges).unwrap_or_default()
    }

    fn policy(&self) -> VertexPolicy {
        self.policy
    }

    fn contains(&self, vertex: &L) -> bool {
        self.index_of(vertex).is_some()
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.vertex(source).map_or(0, |v| v.edge_weight(target))
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }
}

/// One line per vertex, `"<label> -> {<target>=<weight>, ...}"`
impl<L: fmt::Display + Hash + Eq> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_auto_creates_vertices() {
        let mut graph = AdjacencyGraph::new();
        assert_eq!(graph.set("X", "Y", 5), Ok(0));

        assert_eq!(graph.vertices(), HashSet::from(["X", "Y"]));
        assert_eq!(graph.targets(&"X"), HashMap::from([("Y", 5)]));
    }

    #[test]
    fn test_self_loop_creates_one_vertex() {
        let mut graph = AdjacencyGraph::new();
        graph.set("A", "A", 3).unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.sources(&"A"), HashMap::from([("A", 3)]));
    }

    #[test]
    fn test_zero_weight_does_not_create_vertices() {
        let mut graph: AdjacencyGraph<&str> = AdjacencyGraph::new();
        assert_eq!(graph.set("X", "Y", 0), Ok(0));
        assert!(graph.vertices().is_empty());
    }

    #[test]
    fn test_reject_policy() {
        let mut graph = AdjacencyGraph::with_policy(VertexPolicy::Reject);
        graph.add("A");

        assert_eq!(graph.set("X", "A", 1), Err(GraphError::InvalidEdgeSource("X")));
        assert_eq!(graph.set("A", "Y", 1), Err(GraphError::InvalidEdgeTarget("Y")));
        assert_eq!(graph.set("X", "A", 0), Err(GraphError::InvalidEdgeSource("X")));
        assert_eq!(graph.set("A", "Y", 0), Err(GraphError::InvalidEdgeTarget("Y")));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_strips_incoming_edges() {
        let mut graph = AdjacencyGraph::new();
        graph.set("A", "B", 5).unwrap();
        graph.set("C", "B", 10).unwrap();
        graph.set("B", "C", 2).unwrap();

        assert!(graph.remove(&"B"));

        assert!(graph.targets(&"A").is_empty());
        assert!(graph.targets(&"C").is_empty());
        assert!(graph.sources(&"C").is_empty());
        assert!(graph.vertex(&"B").is_none());
    }

    #[test]
    fn test_display() {
        let mut graph = AdjacencyGraph::new();
        graph.add("A");
        graph.add("B");
        graph.set("A", "B", 5).unwrap();
        graph.add("C");
        graph.set("A", "C", 10).unwrap();

        assert_eq!(graph.to_string(), "A -> {B=5, C=10}\nB -> {}\nC -> {}\n");
    }

    #[test]
    fn test_weight_lookup() {
        let mut graph = AdjacencyGraph::new();
        graph.set("A", "B", 5).unwrap();

        assert_eq!(graph.weight(&"A", &"B"), 5);
        assert_eq!(graph.weight(&"B", &"A"), 0);
        assert_eq!(graph.weight(&"Z", &"A"), 0);
    }
}
