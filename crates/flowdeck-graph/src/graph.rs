//! The pipeline graph
//!
//! Nodes and edges live in persistent vectors: cloning a graph is cheap and
//! structurally shares storage, so snapshots handed to subscribers or to the
//! write-back layer can never partially overwrite newer state.

use crate::edge::Edge;
use crate::error::GraphError;
use crate::node::Node;
use flowdeck_core::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nodes plus connections of one pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineGraph {
    nodes: im::Vector<Node>,
    edges: im::Vector<Edge>,
}

impl PipelineGraph {
    /// Empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph from explicit node and edge lists, preserving order
    #[must_use]
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes: nodes.into(),
            edges: edges.into(),
        }
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an edge by id
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// The edge for an ordered (source, target) pair, if present
    #[must_use]
    pub fn edge_between(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// Whether a node with this id exists
    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Edges incident to a node, at either end
    pub fn edges_touching(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.touches(node))
    }

    /// Nodes in insertion order
    #[inline]
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Edges in insertion order
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has neither nodes nor edges
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Edges whose endpoints both resolve to a present node
    ///
    /// Dangling references are tolerated in stored data; consumers draw only
    /// the live subset.
    pub fn live_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| self.contains_node(e.source) && self.contains_node(e.target))
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push_back(edge);
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        self.nodes.get_mut(index)
    }

    /// Remove a node by id; returns whether anything was removed
    pub(crate) fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        self.nodes.len() != before
    }

    /// Drop every edge incident to a node; returns how many were removed
    pub(crate) fn remove_edges_touching(&mut self, node: NodeId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(node));
        before - self.edges.len()
    }

    pub(crate) fn remove_edge(&mut self, id: EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Encode to a JSON snapshot
    #[must_use]
    pub fn to_value(&self) -> Value {
        // A graph of plain serde types cannot fail to serialize.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Decode from a JSON snapshot
    pub fn from_value(value: Value) -> Result<Self, GraphError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::Point;
    use pretty_assertions::assert_eq;

    fn two_node_graph() -> (PipelineGraph, NodeId, NodeId) {
        let a = Node::new("document-intake", Point::ZERO);
        let b = Node::new("smart-ocr", Point::new(300.0, 0.0));
        let (ida, idb) = (a.id, b.id);
        let edge = Edge::new(ida, idb).with_label("Raw Documents");
        (
            PipelineGraph::from_parts(vec![a, b], vec![edge]),
            ida,
            idb,
        )
    }

    #[test]
    fn lookup_and_counts() {
        let (graph, a, b) = two_node_graph();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_node(a));
        assert!(graph.edge_between(a, b).is_some());
        assert!(graph.edge_between(b, a).is_none());
    }

    #[test]
    fn clone_is_independent() {
        let (mut graph, a, _) = two_node_graph();
        let snapshot = graph.clone();
        graph.remove_node(a);
        graph.remove_edges_touching(a);
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn live_edges_filter_dangling_references() {
        let node = Node::new("smart-ocr", Point::ZERO);
        let id = node.id;
        let dangling = Edge::new(id, NodeId::new());
        let graph = PipelineGraph::from_parts(vec![node], vec![dangling]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.live_edges().count(), 0);
    }

    #[test]
    fn snapshot_round_trip() {
        let (graph, _, _) = two_node_graph();
        let decoded = PipelineGraph::from_value(graph.to_value()).unwrap();
        assert_eq!(decoded, graph);
    }
}
