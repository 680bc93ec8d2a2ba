//! Pipeline envelope
//!
//! A pipeline is a named, timestamped graph. Lifecycle timestamps come from
//! the caller (the manager injects its clock) so tests stay deterministic.

use crate::graph::PipelineGraph;
use flowdeck_core::{PipelineId, PipelineStatus, Timestamp};
use serde::{Deserialize, Serialize};

/// One named pipeline and its graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: PipelineId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: PipelineStatus,
    #[serde(default)]
    pub graph: PipelineGraph,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pipeline {
    /// Create an empty draft pipeline
    #[must_use]
    pub fn new(name: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: PipelineId::new(),
            name: name.into(),
            description: None,
            status: PipelineStatus::Draft,
            graph: PipelineGraph::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// With a description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With an initial graph
    #[inline]
    #[must_use]
    pub fn with_graph(mut self, graph: PipelineGraph) -> Self {
        self.graph = graph;
        self
    }

    /// Merge a patch, stamping `updated_at` with the given instant
    pub fn apply(&mut self, patch: PipelinePatch, now: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(graph) = patch.graph {
            self.graph = graph;
        }
        self.updated_at = now;
    }
}

/// Partial pipeline update; `None` fields are left untouched
///
/// `description` is doubly optional so a patch can distinguish "leave it"
/// (`None`) from "clear it" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelinePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<PipelineGraph>,
}

impl PipelinePatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch the name
    #[inline]
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Patch the description
    #[inline]
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Patch the status
    #[inline]
    #[must_use]
    pub fn status(mut self, status: PipelineStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Patch the graph
    #[inline]
    #[must_use]
    pub fn graph(mut self, graph: PipelineGraph) -> Self {
        self.graph = Some(graph);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;

    fn epoch() -> Timestamp {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn new_pipeline_is_an_empty_draft() {
        let pipeline = Pipeline::new("Invoices", epoch());
        assert_eq!(pipeline.status, PipelineStatus::Draft);
        assert!(pipeline.graph.is_empty());
        assert_eq!(pipeline.created_at, pipeline.updated_at);
    }

    #[test]
    fn apply_bumps_updated_at_only() {
        let mut pipeline = Pipeline::new("Invoices", epoch());
        let later = epoch() + Duration::seconds(30);
        pipeline.apply(PipelinePatch::new().name("Contracts"), later);
        assert_eq!(pipeline.name, "Contracts");
        assert_eq!(pipeline.created_at, epoch());
        assert_eq!(pipeline.updated_at, later);
    }

    #[test]
    fn patch_can_clear_description() {
        let mut pipeline = Pipeline::new("Invoices", epoch()).with_description("old");
        let patch = PipelinePatch {
            description: Some(None),
            ..PipelinePatch::default()
        };
        pipeline.apply(patch, epoch());
        assert_eq!(pipeline.description, None);
    }
}
