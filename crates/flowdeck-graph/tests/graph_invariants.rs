//! Property tests for the graph mutation contract

use flowdeck_core::Point;
use flowdeck_graph::{GraphModel, Node};
use proptest::prelude::*;

const SLUGS: &[&str] = &[
    "document-intake",
    "smart-ocr",
    "data-extractor",
    "business-validator",
    "erp-updater",
];

/// Build a model with `node_count` nodes and edges for every index pair given
fn build_model(node_count: usize, edge_pairs: &[(usize, usize)]) -> GraphModel {
    let mut model = GraphModel::new();
    let ids: Vec<_> = (0..node_count)
        .map(|i| {
            model.add_node(Node::new(
                SLUGS[i % SLUGS.len()],
                Point::new(i as f64 * 250.0, 0.0),
            ))
        })
        .collect();
    for &(s, t) in edge_pairs {
        model.add_edge(ids[s % node_count], ids[t % node_count], None);
    }
    model
}

proptest! {
    /// After any deletion sequence, no edge references a missing node.
    #[test]
    fn cascade_leaves_no_dangling_edges(
        node_count in 1usize..8,
        edge_pairs in prop::collection::vec((0usize..8, 0usize..8), 0..20),
        deletions in prop::collection::vec(0usize..8, 0..12),
    ) {
        let mut model = build_model(node_count, &edge_pairs);
        let ids: Vec<_> = model.graph().nodes().map(|n| n.id).collect();
        for d in deletions {
            model.delete_node(ids[d % ids.len()]);
        }
        for edge in model.graph().edges() {
            prop_assert!(model.graph().contains_node(edge.source));
            prop_assert!(model.graph().contains_node(edge.target));
        }
    }

    /// Deleting the same node twice changes nothing the second time.
    #[test]
    fn delete_is_idempotent(
        node_count in 1usize..8,
        edge_pairs in prop::collection::vec((0usize..8, 0usize..8), 0..20),
        victim in 0usize..8,
    ) {
        let mut model = build_model(node_count, &edge_pairs);
        let ids: Vec<_> = model.graph().nodes().map(|n| n.id).collect();
        let victim = ids[victim % ids.len()];

        model.delete_node(victim);
        let after_first = model.graph().clone();
        let revision = model.revision();

        model.delete_node(victim);
        prop_assert_eq!(model.graph(), &after_first);
        prop_assert_eq!(model.revision(), revision);
    }

    /// Repeated (source, target) inserts collapse to one edge keeping the
    /// first label.
    #[test]
    fn duplicate_edges_collapse(
        labels in prop::collection::vec("[a-z]{1,12}", 1..6),
    ) {
        let mut model = build_model(2, &[]);
        let ids: Vec<_> = model.graph().nodes().map(|n| n.id).collect();
        let first_label = labels[0].clone();
        for label in labels {
            model.add_edge(ids[0], ids[1], Some(label));
        }
        prop_assert_eq!(model.graph().edge_count(), 1);
        let edge = model.graph().edge_between(ids[0], ids[1]).unwrap();
        prop_assert_eq!(edge.display_label(), first_label.as_str());
    }
}
