//! Connections between nodes

use flowdeck_core::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Label applied when an edge is created without one
pub const DEFAULT_EDGE_LABEL: &str = "Data Flow";

/// A directed connection from one node's output to another's input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Generated identifier
    pub id: EdgeId,
    /// Upstream node
    pub source: NodeId,
    /// Downstream node
    pub target: NodeId,
    /// Optional display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    /// Create an unlabelled edge
    #[must_use]
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId::new(),
            source,
            target,
            label: None,
        }
    }

    /// With a display label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label to display, falling back to [`DEFAULT_EDGE_LABEL`]
    #[inline]
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_EDGE_LABEL)
    }

    /// Whether this edge touches the given node at either end
    #[inline]
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}
