//! Storage boundary
//!
//! [`Storage`] is the persistence seam: pipelines (with their graphs embedded
//! as JSON), agent definitions, and the normalized node/connection rows.
//! [`MemStorage`] is the in-process implementation used by the demo and by
//! tests; a database-backed implementation slots in behind the same trait.

use crate::records::{
    AgentRecord, ConnectionRecord, NewAgentRecord, NewConnectionRecord, NewNodeRecord,
    NewPipeline, NodeRecord,
};
use flowdeck_core::{Clock, EdgeId, NodeId, PipelineId, SystemClock};
use flowdeck_graph::{NodePatch, Pipeline, PipelinePatch};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// CRUD over the four persisted entity kinds
///
/// Deletes report whether anything was removed and never cascade: removing a
/// pipeline leaves its node and connection rows behind with dangling
/// references, which readers filter.
pub trait Storage: Send + Sync {
    fn pipeline(&self, id: PipelineId) -> Option<Pipeline>;
    fn pipelines(&self) -> Vec<Pipeline>;
    fn create_pipeline(&self, new: NewPipeline) -> Pipeline;
    fn update_pipeline(&self, id: PipelineId, patch: PipelinePatch) -> Option<Pipeline>;
    fn delete_pipeline(&self, id: PipelineId) -> bool;

    fn agent(&self, id: Uuid) -> Option<AgentRecord>;
    fn agents(&self) -> Vec<AgentRecord>;
    fn create_agent(&self, new: NewAgentRecord) -> AgentRecord;
    fn delete_agent(&self, id: Uuid) -> bool;

    fn node(&self, id: NodeId) -> Option<NodeRecord>;
    fn nodes_by_pipeline(&self, pipeline_id: PipelineId) -> Vec<NodeRecord>;
    fn create_node(&self, new: NewNodeRecord) -> NodeRecord;
    fn update_node(&self, id: NodeId, patch: NodePatch) -> Option<NodeRecord>;
    fn delete_node(&self, id: NodeId) -> bool;

    fn connection(&self, id: EdgeId) -> Option<ConnectionRecord>;
    fn connections_by_pipeline(&self, pipeline_id: PipelineId) -> Vec<ConnectionRecord>;
    fn create_connection(&self, new: NewConnectionRecord) -> ConnectionRecord;
    fn delete_connection(&self, id: EdgeId) -> bool;
}

#[derive(Default)]
struct Tables {
    pipelines: IndexMap<PipelineId, Pipeline>,
    agents: IndexMap<Uuid, AgentRecord>,
    nodes: IndexMap<NodeId, NodeRecord>,
    connections: IndexMap<EdgeId, ConnectionRecord>,
}

/// In-memory storage
pub struct MemStorage {
    tables: RwLock<Tables>,
    clock: Arc<dyn Clock>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl MemStorage {
    /// Empty storage stamping timestamps from the given clock
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            clock,
        }
    }
}

impl Storage for MemStorage {
    fn pipeline(&self, id: PipelineId) -> Option<Pipeline> {
        self.tables.read().pipelines.get(&id).cloned()
    }

    fn pipelines(&self) -> Vec<Pipeline> {
        self.tables.read().pipelines.values().cloned().collect()
    }

    fn create_pipeline(&self, new: NewPipeline) -> Pipeline {
        let now = self.clock.now();
        let mut pipeline = Pipeline::new(new.name, now).with_graph(new.graph);
        pipeline.description = new.description;
        pipeline.status = new.status;
        self.tables
            .write()
            .pipelines
            .insert(pipeline.id, pipeline.clone());
        pipeline
    }

    fn update_pipeline(&self, id: PipelineId, patch: PipelinePatch) -> Option<Pipeline> {
        let now = self.clock.now();
        let mut tables = self.tables.write();
        let pipeline = tables.pipelines.get_mut(&id)?;
        pipeline.apply(patch, now);
        Some(pipeline.clone())
    }

    fn delete_pipeline(&self, id: PipelineId) -> bool {
        self.tables.write().pipelines.shift_remove(&id).is_some()
    }

    fn agent(&self, id: Uuid) -> Option<AgentRecord> {
        self.tables.read().agents.get(&id).cloned()
    }

    fn agents(&self) -> Vec<AgentRecord> {
        self.tables.read().agents.values().cloned().collect()
    }

    fn create_agent(&self, new: NewAgentRecord) -> AgentRecord {
        let record = AgentRecord {
            id: Uuid::new_v4(),
            name: new.name,
            category: new.category,
            subtype: new.subtype,
            description: new.description,
            icon: new.icon,
            color: new.color,
            configuration: new.configuration,
            is_active: new.is_active,
        };
        self.tables.write().agents.insert(record.id, record.clone());
        record
    }

    fn delete_agent(&self, id: Uuid) -> bool {
        self.tables.write().agents.shift_remove(&id).is_some()
    }

    fn node(&self, id: NodeId) -> Option<NodeRecord> {
        self.tables.read().nodes.get(&id).cloned()
    }

    fn nodes_by_pipeline(&self, pipeline_id: PipelineId) -> Vec<NodeRecord> {
        self.tables
            .read()
            .nodes
            .values()
            .filter(|n| n.pipeline_id == Some(pipeline_id))
            .cloned()
            .collect()
    }

    fn create_node(&self, new: NewNodeRecord) -> NodeRecord {
        let record = NodeRecord {
            id: NodeId::new(),
            pipeline_id: new.pipeline_id,
            agent_type_id: new.agent_type_id,
            position: new.position,
            configuration: new.configuration,
            status: new.status,
            metrics: new.metrics,
        };
        self.tables.write().nodes.insert(record.id, record.clone());
        record
    }

    fn update_node(&self, id: NodeId, patch: NodePatch) -> Option<NodeRecord> {
        let mut tables = self.tables.write();
        let record = tables.nodes.get_mut(&id)?;
        if let Some(position) = patch.position {
            record.position = position;
        }
        if let Some(configuration) = patch.configuration {
            record.configuration = configuration;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        if let Some(metrics) = patch.metrics {
            record.metrics = metrics;
        }
        Some(record.clone())
    }

    fn delete_node(&self, id: NodeId) -> bool {
        self.tables.write().nodes.shift_remove(&id).is_some()
    }

    fn connection(&self, id: EdgeId) -> Option<ConnectionRecord> {
        self.tables.read().connections.get(&id).cloned()
    }

    fn connections_by_pipeline(&self, pipeline_id: PipelineId) -> Vec<ConnectionRecord> {
        self.tables
            .read()
            .connections
            .values()
            .filter(|c| c.pipeline_id == Some(pipeline_id))
            .cloned()
            .collect()
    }

    fn create_connection(&self, new: NewConnectionRecord) -> ConnectionRecord {
        let record = ConnectionRecord {
            id: EdgeId::new(),
            pipeline_id: new.pipeline_id,
            source_node_id: new.source_node_id,
            target_node_id: new.target_node_id,
            label: new.label,
        };
        self.tables
            .write()
            .connections
            .insert(record.id, record.clone());
        record
    }

    fn delete_connection(&self, id: EdgeId) -> bool {
        self.tables.write().connections.shift_remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use flowdeck_core::{ManualClock, NodeStatus, Point};
    use pretty_assertions::assert_eq;

    fn storage_with_clock() -> (MemStorage, ManualClock) {
        let clock = ManualClock::new();
        (MemStorage::new(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn pipeline_crud_round_trip() {
        let (storage, clock) = storage_with_clock();
        let created = storage.create_pipeline(NewPipeline {
            name: "Invoices".into(),
            ..NewPipeline::default()
        });

        clock.advance(Duration::seconds(5));
        let updated = storage
            .update_pipeline(created.id, PipelinePatch::new().name("Contracts"))
            .unwrap();
        assert_eq!(updated.name, "Contracts");
        assert!(updated.updated_at > updated.created_at);

        assert!(storage.delete_pipeline(created.id));
        assert!(!storage.delete_pipeline(created.id));
        assert!(storage.pipeline(created.id).is_none());
    }

    #[test]
    fn deleting_a_pipeline_does_not_cascade_to_rows() {
        let (storage, _clock) = storage_with_clock();
        let pipeline = storage.create_pipeline(NewPipeline {
            name: "P".into(),
            ..NewPipeline::default()
        });
        let node = storage.create_node(NewNodeRecord {
            pipeline_id: Some(pipeline.id),
            agent_type_id: Some("smart-ocr".into()),
            position: Point::new(10.0, 10.0),
            ..NewNodeRecord::default()
        });

        storage.delete_pipeline(pipeline.id);

        // The row survives with a dangling pipeline reference.
        let orphan = storage.node(node.id).unwrap();
        assert_eq!(orphan.pipeline_id, Some(pipeline.id));
        assert!(storage.pipeline(pipeline.id).is_none());
    }

    #[test]
    fn connection_rows_tolerate_null_endpoints() {
        let (storage, _clock) = storage_with_clock();
        let record = storage.create_connection(NewConnectionRecord::default());
        assert_eq!(record.source_node_id, None);
        assert_eq!(record.target_node_id, None);
        assert_eq!(storage.connection(record.id), Some(record));
    }

    #[test]
    fn rows_filter_by_pipeline() {
        let (storage, _clock) = storage_with_clock();
        let p1 = storage.create_pipeline(NewPipeline {
            name: "one".into(),
            ..NewPipeline::default()
        });
        let p2 = storage.create_pipeline(NewPipeline {
            name: "two".into(),
            ..NewPipeline::default()
        });
        for pipeline_id in [Some(p1.id), Some(p1.id), Some(p2.id), None] {
            storage.create_node(NewNodeRecord {
                pipeline_id,
                ..NewNodeRecord::default()
            });
        }
        assert_eq!(storage.nodes_by_pipeline(p1.id).len(), 2);
        assert_eq!(storage.nodes_by_pipeline(p2.id).len(), 1);
    }

    #[test]
    fn node_update_applies_patch_fields() {
        let (storage, _clock) = storage_with_clock();
        let node = storage.create_node(NewNodeRecord::default());
        let updated = storage
            .update_node(node.id, NodePatch::new().status(NodeStatus::Running))
            .unwrap();
        assert_eq!(updated.status, NodeStatus::Running);
        assert_eq!(updated.position, node.position);
        assert!(storage.update_node(NodeId::new(), NodePatch::new()).is_none());
    }
}
