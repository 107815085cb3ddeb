//! Edge record used by the edge-list representation

use super::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed, weighted edge
///
/// The endpoints never change once the edge exists; only the weight is
/// updated in place by the owning graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<L> {
    /// Source vertex (edge goes FROM this vertex)
    pub source: L,

    /// Target vertex (edge goes TO this vertex)
    pub target: L,

    /// Current weight, always non-zero while the edge is stored
    pub weight: Weight,
}

impl<L: PartialEq> Edge<L> {
    /// Create a new directed edge
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Check if this edge is exactly `source -> target`
    pub fn connects(&self, source: &L, target: &L) -> bool {
        self.source == *source && self.target == *target
    }

    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: &L) -> bool {
        self.source == *vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: &L) -> bool {
        self.target == *vertex
    }

    /// Check if either endpoint is `vertex`
    pub fn touches(&self, vertex: &L) -> bool {
        self.starts_from(vertex) || self.ends_at(vertex)
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [weight={}]", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("A", "B", 5);

        assert_eq!(edge.source, "A");
        assert_eq!(edge.target, "B");
        assert_eq!(edge.weight, 5);
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new("A", "B", 1);

        assert!(edge.starts_from(&"A"));
        assert!(edge.ends_at(&"B"));
        assert!(!edge.starts_from(&"B"));
        assert!(!edge.ends_at(&"A"));
    }

    #[test]
    fn test_edge_connects_is_ordered() {
        let edge = Edge::new("A", "B", 1);

        assert!(edge.connects(&"A", &"B"));
        assert!(!edge.connects(&"B", &"A"));
        assert!(edge.touches(&"A"));
        assert!(edge.touches(&"B"));
        assert!(!edge.touches(&"C"));
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge::new("A", "B", 5);
        assert_eq!(edge.to_string(), "A -> B [weight=5]");
    }

    #[test]
    fn test_edge_serde() {
        let edge = Edge::new("A".to_string(), "B".to_string(), 7);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["source"], "A");
        assert_eq!(json["target"], "B");
        assert_eq!(json["weight"], 7);
    }
}
