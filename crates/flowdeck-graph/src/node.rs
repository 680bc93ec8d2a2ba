//! Placed nodes and partial updates

use flowdeck_core::{AgentTypeId, NodeId, NodeStatus, Point};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One agent instance placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Generated identifier
    pub id: NodeId,
    /// Catalog slug this node was placed from (soft reference)
    pub agent_type_id: AgentTypeId,
    /// Canvas-space position of the top-left corner
    pub position: Point,
    /// Per-node configuration, seeded from the catalog defaults
    #[serde(default)]
    pub configuration: Map<String, Value>,
    /// Lifecycle status
    #[serde(default)]
    pub status: NodeStatus,
    /// Display metrics mutated by the simulator
    #[serde(default)]
    pub metrics: Map<String, Value>,
}

impl Node {
    /// Create an idle node with empty configuration and metrics
    #[must_use]
    pub fn new(agent_type_id: impl Into<AgentTypeId>, position: Point) -> Self {
        Self {
            id: NodeId::new(),
            agent_type_id: agent_type_id.into(),
            position,
            configuration: Map::new(),
            status: NodeStatus::Idle,
            metrics: Map::new(),
        }
    }

    /// With an explicit configuration object
    #[inline]
    #[must_use]
    pub fn with_configuration(mut self, configuration: Map<String, Value>) -> Self {
        self.configuration = configuration;
        self
    }

    /// With an explicit status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    /// With seeded metrics
    #[inline]
    #[must_use]
    pub fn with_metrics(mut self, metrics: Map<String, Value>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Merge a patch into this node, field by field
    pub fn apply(&mut self, patch: &NodePatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(configuration) = &patch.configuration {
            self.configuration = configuration.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(metrics) = &patch.metrics {
            self.metrics = metrics.clone();
        }
    }
}

/// Partial node update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Map<String, Value>>,
}

impl NodePatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch the position
    #[inline]
    #[must_use]
    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Patch the configuration object
    #[inline]
    #[must_use]
    pub fn configuration(mut self, configuration: Map<String, Value>) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Patch the status
    #[inline]
    #[must_use]
    pub fn status(mut self, status: NodeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Patch the metrics object
    #[inline]
    #[must_use]
    pub fn metrics(mut self, metrics: Map<String, Value>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.configuration.is_none()
            && self.status.is_none()
            && self.metrics.is_none()
    }
}
