//! Directed, weighted graph ADT
//!
//! This module implements the graph contract with two representations:
//! - [`EdgeListGraph`]: a vertex set plus a flat list of edge records
//! - [`AdjacencyGraph`]: vertex objects each owning their outgoing edges
//!
//! Both satisfy [`Graph`] and give identical results for `vertices`,
//! `sources`, `targets` and the return value of `set` on valid input.

pub mod adjacency;
pub mod edge;
pub mod edge_list;
pub mod traits;
pub mod types;
pub mod vertex;

// Re-export main types
pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use edge_list::EdgeListGraph;
pub use traits::{Graph, GraphError, GraphResult};
pub use types::{VertexPolicy, Weight};
pub use vertex::Vertex;
