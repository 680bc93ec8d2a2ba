//! Newtype identifiers
//!
//! Nodes, edges, and pipelines carry freshly generated uuid-v4 identifiers.
//! Agent types are identified by their catalog slug (e.g. `smart-ocr`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a placed node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Generate a fresh node id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub Uuid);

impl EdgeId {
    /// Generate a fresh edge id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PipelineId(pub Uuid);

impl PipelineId {
    /// Generate a fresh pipeline id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PipelineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PipelineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog slug of an agent type (e.g. `smart-ocr`, `fraud-detector`)
///
/// A soft reference: a node may carry a slug that no longer resolves in the
/// catalog, in which case consumers omit the node rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentTypeId(pub String);

impl AgentTypeId {
    /// Create an agent type id from a slug
    #[inline]
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Slug as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentTypeId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl std::fmt::Display for AgentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_generation() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn pipeline_id_generation() {
        assert_ne!(PipelineId::new(), PipelineId::new());
    }

    #[test]
    fn agent_type_id_from_slug() {
        let id = AgentTypeId::from("smart-ocr");
        assert_eq!(id.as_str(), "smart-ocr");
        assert_eq!(id.to_string(), "smart-ocr");
    }

    #[test]
    fn agent_type_id_serde_transparent() {
        let id = AgentTypeId::from("fraud-detector");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"fraud-detector\"");
    }
}
