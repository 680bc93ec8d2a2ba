//! Persisted record shapes
//!
//! Mirrors the four storage tables. Foreign keys are soft: a node record may
//! point at a pipeline or agent that no longer exists, and nothing at this
//! layer cascades. Readers filter; writers never fail on a dangling
//! reference.

use flowdeck_catalog::{AgentCategory, AgentSubtype};
use flowdeck_core::{AgentTypeId, EdgeId, NodeId, NodeStatus, PipelineId, Point};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Fields for creating a pipeline record; the store assigns id and timestamps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPipeline {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: flowdeck_core::PipelineStatus,
    #[serde(default)]
    pub graph: flowdeck_graph::PipelineGraph,
}

/// A registered agent definition, as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: Uuid,
    pub name: String,
    pub category: AgentCategory,
    pub subtype: AgentSubtype,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub configuration: Map<String, Value>,
    pub is_active: bool,
}

/// Fields for creating an agent record; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAgentRecord {
    pub name: String,
    pub category: AgentCategory,
    pub subtype: AgentSubtype,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub configuration: Map<String, Value>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// A node row, normalized out of its pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub pipeline_id: Option<PipelineId>,
    #[serde(default)]
    pub agent_type_id: Option<AgentTypeId>,
    pub position: Point,
    #[serde(default)]
    pub configuration: Map<String, Value>,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default)]
    pub metrics: Map<String, Value>,
}

/// Fields for creating a node record; the store assigns the id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNodeRecord {
    #[serde(default)]
    pub pipeline_id: Option<PipelineId>,
    #[serde(default)]
    pub agent_type_id: Option<AgentTypeId>,
    #[serde(default)]
    pub position: Point,
    #[serde(default)]
    pub configuration: Map<String, Value>,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default)]
    pub metrics: Map<String, Value>,
}

/// A connection row, normalized out of its pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: EdgeId,
    #[serde(default)]
    pub pipeline_id: Option<PipelineId>,
    #[serde(default)]
    pub source_node_id: Option<NodeId>,
    #[serde(default)]
    pub target_node_id: Option<NodeId>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Fields for creating a connection record; the store assigns the id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewConnectionRecord {
    #[serde(default)]
    pub pipeline_id: Option<PipelineId>,
    #[serde(default)]
    pub source_node_id: Option<NodeId>,
    #[serde(default)]
    pub target_node_id: Option<NodeId>,
    #[serde(default)]
    pub label: Option<String>,
}
