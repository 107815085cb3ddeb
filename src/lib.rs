//! Weighted Graph
//!
//! A directed, weighted graph abstract data type with two interchangeable
//! in-memory representations behind one contract.
//!
//! # Data model
//!
//! - Vertices are unique, immutable labels of any `Clone + Eq + Hash` type
//! - Edges are directed `(source, target, weight)` records, at most one per
//!   ordered pair
//! - Weights are positive integers; setting a weight of 0 deletes the edge
//! - Removing a vertex removes every edge touching it
//!
//! # Representations
//!
//! - [`EdgeListGraph`]: vertex set plus an insertion-ordered edge list.
//!   Rejects edges to unknown vertices by default.
//! - [`AdjacencyGraph`]: vertex objects owning their outgoing edges.
//!   Auto-creates unknown vertices by default.
//!
//! Use [`GraphConfig`] to pick one at construction time and apply a single
//! [`VertexPolicy`] to either.
//!
//! ## Example Usage
//!
//! ```rust
//! use weighted_graph::{EdgeListGraph, Graph};
//!
//! let mut graph = EdgeListGraph::new();
//! graph.add("A");
//! graph.add("B");
//! graph.add("C");
//!
//! assert_eq!(graph.set("A", "B", 5).unwrap(), 0);
//! assert_eq!(graph.set("C", "B", 10).unwrap(), 0);
//!
//! let sources = graph.sources(&"B");
//! assert_eq!(sources.len(), 2);
//! assert_eq!(sources[&"A"], 5);
//!
//! assert_eq!(graph.to_string(), "A -> B [weight=5]\nC -> B [weight=10]\n");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, GraphConfig, Representation};
pub use graph::{
    AdjacencyGraph, Edge, EdgeListGraph, Graph, GraphError, GraphResult, Vertex, VertexPolicy,
    Weight,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
