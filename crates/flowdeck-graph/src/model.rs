//! Mutable graph model
//!
//! Wraps a [`PipelineGraph`] with the mutation contract of the builder:
//! cascade deletes, duplicate-edge collapse, selection tracking. Every
//! effective mutation bumps a revision counter, which the write-back layer
//! watches to decide when the model is dirty.

use crate::edge::Edge;
use crate::graph::PipelineGraph;
use crate::node::{Node, NodePatch};
use flowdeck_core::{EdgeId, NodeId, NodeStatus};
use tracing::{debug, trace};

/// The graph plus ephemeral editing state for the active pipeline
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: PipelineGraph,
    selected: Option<NodeId>,
    revision: u64,
}

impl GraphModel {
    /// Empty model
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Model over an existing graph
    #[must_use]
    pub fn with_graph(graph: PipelineGraph) -> Self {
        Self {
            graph,
            selected: None,
            revision: 0,
        }
    }

    /// Current graph snapshot (cheap to clone)
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &PipelineGraph {
        &self.graph
    }

    /// Currently selected node, if any
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Monotonic counter bumped on every effective mutation
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole graph, e.g. when switching pipelines
    ///
    /// Clears the selection; the old pipeline's selection is meaningless in
    /// the new one.
    pub fn load(&mut self, graph: PipelineGraph) {
        self.graph = graph;
        self.selected = None;
        self.bump();
    }

    /// Place a node, returning its generated id
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        debug!(node = %id, agent_type = %node.agent_type_id, "add node");
        self.graph.push_node(node);
        self.bump();
        id
    }

    /// Merge a patch into a node; silently ignores unknown ids
    pub fn update_node(&mut self, id: NodeId, patch: &NodePatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(node) = self.graph.node_mut(id) {
            node.apply(patch);
            trace!(node = %id, "update node");
            self.bump();
        }
    }

    /// Set one node's status; silently ignores unknown ids
    pub fn set_node_status(&mut self, id: NodeId, status: NodeStatus) {
        self.update_node(id, &NodePatch::new().status(status));
    }

    /// Set every node's status, e.g. when the pipeline starts or stops
    pub fn set_all_statuses(&mut self, status: NodeStatus) {
        let ids: Vec<NodeId> = self.graph.nodes().map(|n| n.id).collect();
        for id in ids {
            self.set_node_status(id, status);
        }
    }

    /// Delete a node, cascading to incident edges and clearing a matching
    /// selection; idempotent
    pub fn delete_node(&mut self, id: NodeId) {
        let removed = self.graph.remove_node(id);
        if !removed {
            return;
        }
        let dropped_edges = self.graph.remove_edges_touching(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(node = %id, dropped_edges, "delete node");
        self.bump();
    }

    /// Connect source to target, returning the edge id
    ///
    /// At most one edge per ordered pair: a duplicate is a no-op that returns
    /// the existing edge's id and preserves its label.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        label: Option<String>,
    ) -> EdgeId {
        if let Some(existing) = self.graph.edge_between(source, target) {
            trace!(edge = %existing.id, "duplicate edge ignored");
            return existing.id;
        }
        let mut edge = Edge::new(source, target);
        if let Some(label) = label {
            edge = edge.with_label(label);
        }
        let id = edge.id;
        debug!(edge = %id, %source, %target, "add edge");
        self.graph.push_edge(edge);
        self.bump();
        id
    }

    /// Delete an edge; no-op if absent
    pub fn delete_edge(&mut self, id: EdgeId) {
        if self.graph.remove_edge(id) {
            debug!(edge = %id, "delete edge");
            self.bump();
        }
    }

    /// Select a node, or clear the selection with `None`
    ///
    /// Selection is ephemeral state and does not bump the revision.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
