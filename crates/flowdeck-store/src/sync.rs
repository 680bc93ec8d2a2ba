//! Debounced model→manager write-back
//!
//! The graph model mutates on every pointer move; writing each intermediate
//! state through the manager would be wasteful and, with a real backend,
//! chatty. [`DebouncedSync`] watches the model's revision counter and flushes
//! once the mutations stop for a settle window, carrying only the final
//! state. The dirty marker is exposed so tests can observe pending flushes.

use crate::manager::PipelineManager;
use chrono::Duration;
use flowdeck_core::{Clock, PipelineId, Timestamp};
use flowdeck_graph::{GraphModel, PipelinePatch};
use std::sync::Arc;
use tracing::debug;

/// Debounce tuning
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Quiet period after the last mutation before a flush
    pub window: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            window: Duration::milliseconds(500),
        }
    }
}

/// Coalesces rapid graph mutations into one write per settle window
pub struct DebouncedSync {
    config: SyncConfig,
    clock: Arc<dyn Clock>,
    last_revision: u64,
    deadline: Option<Timestamp>,
    flushes: u64,
}

impl std::fmt::Debug for DebouncedSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedSync")
            .field("last_revision", &self.last_revision)
            .field("deadline", &self.deadline)
            .field("flushes", &self.flushes)
            .finish_non_exhaustive()
    }
}

impl DebouncedSync {
    /// Sync starting clean against the given model state
    #[must_use]
    pub fn new(config: SyncConfig, clock: Arc<dyn Clock>, model: &GraphModel) -> Self {
        Self {
            config,
            clock,
            last_revision: model.revision(),
            deadline: None,
            flushes: 0,
        }
    }

    /// Whether a flush is pending
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.deadline.is_some()
    }

    /// Number of flushes performed so far
    #[inline]
    #[must_use]
    pub fn flush_count(&self) -> u64 {
        self.flushes
    }

    /// Notice a (possible) model mutation; restarts the settle window when
    /// the revision moved
    pub fn observe(&mut self, model: &GraphModel) {
        let revision = model.revision();
        if revision != self.last_revision {
            self.last_revision = revision;
            self.deadline = Some(self.clock.now() + self.config.window);
        }
    }

    /// Adopt the model's current state as already persisted
    ///
    /// Called after loading a pipeline into the model, so the reload itself
    /// is not written back.
    pub fn mark_clean(&mut self, model: &GraphModel) {
        self.last_revision = model.revision();
        self.deadline = None;
    }

    /// Flush if the settle window has elapsed; returns whether a write
    /// happened
    pub fn poll(
        &mut self,
        model: &GraphModel,
        manager: &mut PipelineManager,
        target: PipelineId,
    ) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.clock.now() < deadline {
            return false;
        }
        self.deadline = None;
        self.flushes += 1;
        debug!(pipeline = %target, revision = self.last_revision, "graph flushed");
        manager.update_pipeline(target, PipelinePatch::new().graph(model.graph().clone()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::{ManualClock, Point};
    use flowdeck_graph::Node;
    use pretty_assertions::assert_eq;

    fn setup() -> (DebouncedSync, GraphModel, PipelineManager, ManualClock) {
        let clock = ManualClock::new();
        let manager = PipelineManager::new(Arc::new(clock.clone()));
        let model = GraphModel::new();
        let sync = DebouncedSync::new(SyncConfig::default(), Arc::new(clock.clone()), &model);
        (sync, model, manager, clock)
    }

    #[test]
    fn five_rapid_mutations_coalesce_into_one_final_write() {
        let (mut sync, mut model, mut manager, clock) = setup();
        let target = manager.active_id();

        for i in 0..5 {
            model.add_node(Node::new("smart-ocr", Point::new(f64::from(i) * 10.0, 0.0)));
            sync.observe(&model);
            clock.advance_millis(50);
            assert!(!sync.poll(&model, &mut manager, target));
        }
        assert!(sync.is_dirty());

        clock.advance_millis(500);
        assert!(sync.poll(&model, &mut manager, target));
        assert_eq!(sync.flush_count(), 1);
        assert!(!sync.is_dirty());

        // The write carries the final state, all five nodes at once.
        assert_eq!(manager.get(target).unwrap().graph.node_count(), 5);
    }

    #[test]
    fn each_mutation_restarts_the_window() {
        let (mut sync, mut model, mut manager, clock) = setup();
        let target = manager.active_id();

        model.add_node(Node::new("smart-ocr", Point::ZERO));
        sync.observe(&model);
        clock.advance_millis(400);
        model.add_node(Node::new("data-extractor", Point::ZERO));
        sync.observe(&model);
        clock.advance_millis(400);

        // 800ms since the first mutation, 400ms since the last: still settling.
        assert!(!sync.poll(&model, &mut manager, target));
        clock.advance_millis(100);
        assert!(sync.poll(&model, &mut manager, target));
    }

    #[test]
    fn clean_model_never_flushes() {
        let (mut sync, model, mut manager, clock) = setup();
        let target = manager.active_id();
        sync.observe(&model);
        clock.advance_millis(10_000);
        assert!(!sync.poll(&model, &mut manager, target));
        assert_eq!(sync.flush_count(), 0);
    }

    #[test]
    fn mark_clean_swallows_a_pending_flush() {
        let (mut sync, mut model, mut manager, clock) = setup();
        let target = manager.active_id();

        model.add_node(Node::new("smart-ocr", Point::ZERO));
        sync.observe(&model);
        assert!(sync.is_dirty());

        sync.mark_clean(&model);
        clock.advance_millis(1000);
        assert!(!sync.poll(&model, &mut manager, target));
    }

    #[test]
    fn selection_changes_do_not_dirty_the_sync() {
        let (mut sync, mut model, _manager, _clock) = setup();
        let id = model.add_node(Node::new("smart-ocr", Point::ZERO));
        sync.mark_clean(&model);
        model.select_node(Some(id));
        sync.observe(&model);
        assert!(!sync.is_dirty());
    }
}
