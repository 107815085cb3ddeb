//! Construction-time selection of a graph representation
//!
//! ```yaml
//! representation: adjacency
//! policy: reject
//! ```

use crate::graph::{AdjacencyGraph, EdgeListGraph, Graph, VertexPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which storage layout backs the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    #[default]
    EdgeList,
    Adjacency,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::EdgeList => write!(f, "edge_list"),
            Representation::Adjacency => write!(f, "adjacency"),
        }
    }
}

/// Graph configuration
///
/// The default builds an edge-list graph with [`VertexPolicy::Reject`].
/// Building from a config always applies `policy` uniformly, whichever
/// representation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// Storage layout
    pub representation: Representation,
    /// Unknown-vertex policy for `set`
    pub policy: VertexPolicy,
}

impl GraphConfig {
    /// Edge-list configuration with the default [`VertexPolicy::Reject`]
    ///
    /// Both named builders share the same default policy. This differs from
    /// [`AdjacencyGraph::new`], which auto-creates; use [`Self::with_policy`]
    /// to get that behavior from a config.
    pub fn edge_list() -> Self {
        Self {
            representation: Representation::EdgeList,
            policy: VertexPolicy::default(),
        }
    }

    /// Vertex-adjacency configuration with the default [`VertexPolicy::Reject`]
    pub fn adjacency() -> Self {
        Self {
            representation: Representation::Adjacency,
            policy: VertexPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: VertexPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse a configuration from YAML; missing fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an empty graph
    pub fn build<L>(&self) -> Box<dyn Graph<L>>
    where
        L: Clone + Eq + Hash + fmt::Debug + 'static,
    {
        info!(
            "Building {} graph with {} policy",
            self.representation, self.policy
        );
        match self.representation {
            Representation::EdgeList => Box::new(EdgeListGraph::with_policy(self.policy)),
            Representation::Adjacency => Box::new(AdjacencyGraph::with_policy(self.policy)),
        }
    }
}
