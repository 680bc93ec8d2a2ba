//! Node and pipeline status enums
//!
//! Statuses are cosmetic in this core: the simulator flips metric fields on
//! `Running` nodes, and consumers pick indicator colors from them. They are
//! serialized in the lowercase wire format of the persisted records.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Freshly placed, not doing anything
    #[default]
    Idle,
    /// Simulated live telemetry applies
    Running,
    /// Finished cleanly
    Success,
    /// Finished with a failure
    Error,
}

impl NodeStatus {
    /// Whether the metrics simulator mutates this node
    #[inline]
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, NodeStatus::Running)
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeStatus::Idle => "idle",
            NodeStatus::Running => "running",
            NodeStatus::Success => "success",
            NodeStatus::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle status of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    /// Being edited, never started
    #[default]
    Draft,
    /// Displayed as live
    Running,
    /// Explicitly stopped
    Stopped,
    /// Failed
    Error,
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PipelineStatus::Draft => "draft",
            PipelineStatus::Running => "running",
            PipelineStatus::Stopped => "stopped",
            PipelineStatus::Error => "error",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_status_defaults_to_idle() {
        assert_eq!(NodeStatus::default(), NodeStatus::Idle);
        assert!(!NodeStatus::Idle.is_running());
        assert!(NodeStatus::Running.is_running());
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&NodeStatus::Running).unwrap(),
            "\"running\""
        );
        assert_eq!(
            serde_json::to_string(&PipelineStatus::Draft).unwrap(),
            "\"draft\""
        );
    }

    #[test]
    fn statuses_deserialize_lowercase() {
        let status: NodeStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(status, NodeStatus::Error);
    }
}
