//! Core type definitions for the graph ADT

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight. Zero is reserved to mean "no edge" and is never stored.
pub type Weight = u32;

/// What `set` does when the source or target is not yet a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VertexPolicy {
    /// Fail with an invalid-argument error
    #[default]
    Reject,
    /// Add the missing vertices before setting the edge
    AutoCreate,
}

impl VertexPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexPolicy::Reject => "reject",
            VertexPolicy::AutoCreate => "auto_create",
        }
    }
}

impl fmt::Display for VertexPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
