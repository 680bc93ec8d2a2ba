//! Pipeline manager
//!
//! Owns the ordered pipeline collection and the active-pipeline pointer.
//! Invariants:
//! - at least one pipeline always exists; deleting the last is refused
//! - every write that changes a pipeline bumps its `updated_at`
//! - subscribers hear about every collection-level change

use crate::error::StoreError;
use flowdeck_core::{Clock, PipelineId};
use flowdeck_graph::{Pipeline, PipelinePatch};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// What changed in the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerEvent {
    Created(PipelineId),
    Deleted(PipelineId),
    Switched(PipelineId),
    Updated(PipelineId),
}

/// Handle for removing a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&ManagerEvent) + Send>;

/// The pipeline collection and its active pointer
pub struct PipelineManager {
    pipelines: IndexMap<PipelineId, Pipeline>,
    active: PipelineId,
    clock: Arc<dyn Clock>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for PipelineManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineManager")
            .field("pipelines", &self.pipelines.len())
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl PipelineManager {
    /// Manager seeded with one empty pipeline, which becomes active
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let initial = Pipeline::new("Untitled Pipeline", clock.now());
        Self::with_pipelines(clock, vec![initial])
    }

    /// Manager over existing pipelines; the first becomes active
    ///
    /// An empty list is topped up with one default pipeline so the
    /// collection invariant holds from the start.
    #[must_use]
    pub fn with_pipelines(clock: Arc<dyn Clock>, mut pipelines: Vec<Pipeline>) -> Self {
        if pipelines.is_empty() {
            pipelines.push(Pipeline::new("Untitled Pipeline", clock.now()));
        }
        let active = pipelines[0].id;
        Self {
            pipelines: pipelines.into_iter().map(|p| (p.id, p)).collect(),
            active,
            clock,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Number of pipelines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    /// Never true; kept for API symmetry with collections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Pipelines in insertion order
    pub fn pipelines(&self) -> impl Iterator<Item = &Pipeline> {
        self.pipelines.values()
    }

    /// Look up a pipeline
    #[must_use]
    pub fn get(&self, id: PipelineId) -> Option<&Pipeline> {
        self.pipelines.get(&id)
    }

    /// Id of the active pipeline
    ///
    /// May dangle after an unvalidated switch; resolve with
    /// [`active_pipeline`](Self::active_pipeline).
    #[inline]
    #[must_use]
    pub fn active_id(&self) -> PipelineId {
        self.active
    }

    /// The active pipeline, if the active id resolves
    #[must_use]
    pub fn active_pipeline(&self) -> Option<&Pipeline> {
        self.pipelines.get(&self.active)
    }

    /// Register a subscriber for collection events
    pub fn subscribe(&mut self, f: impl Fn(&ManagerEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber; unknown handles are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&self, event: ManagerEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&event);
        }
    }

    /// Create an empty pipeline and make it active
    pub fn create_pipeline(&mut self, name: impl Into<String>) -> PipelineId {
        let pipeline = Pipeline::new(name, self.clock.now());
        let id = pipeline.id;
        self.pipelines.insert(id, pipeline);
        self.active = id;
        debug!(pipeline = %id, "pipeline created");
        self.notify(ManagerEvent::Created(id));
        self.notify(ManagerEvent::Switched(id));
        id
    }

    /// Delete a pipeline
    ///
    /// Refuses to delete the last remaining pipeline. When the active
    /// pipeline is deleted, the first survivor becomes active.
    pub fn delete_pipeline(&mut self, id: PipelineId) -> Result<(), StoreError> {
        if !self.pipelines.contains_key(&id) {
            return Err(StoreError::UnknownPipeline(id));
        }
        if self.pipelines.len() <= 1 {
            warn!(pipeline = %id, "refusing to delete the last pipeline");
            return Err(StoreError::LastPipeline);
        }
        self.pipelines.shift_remove(&id);
        debug!(pipeline = %id, "pipeline deleted");
        self.notify(ManagerEvent::Deleted(id));
        if self.active == id {
            // Collection is non-empty here, so a first entry exists.
            if let Some(first) = self.pipelines.keys().next().copied() {
                self.active = first;
                self.notify(ManagerEvent::Switched(first));
            }
        }
        Ok(())
    }

    /// Make a pipeline active without validating that it exists
    pub fn switch_pipeline(&mut self, id: PipelineId) {
        self.active = id;
        self.notify(ManagerEvent::Switched(id));
    }

    /// Rename a pipeline, bumping `updated_at`; unknown ids are ignored
    pub fn rename_pipeline(&mut self, id: PipelineId, name: impl Into<String>) {
        self.update_pipeline(id, PipelinePatch::new().name(name));
    }

    /// Merge a patch into a pipeline, bumping `updated_at`; unknown ids are
    /// ignored
    pub fn update_pipeline(&mut self, id: PipelineId, patch: PipelinePatch) {
        let now = self.clock.now();
        let Some(pipeline) = self.pipelines.get_mut(&id) else {
            return;
        };
        pipeline.apply(patch, now);
        self.notify(ManagerEvent::Updated(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use flowdeck_core::ManualClock;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn manager() -> (PipelineManager, ManualClock) {
        let clock = ManualClock::new();
        (PipelineManager::new(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn starts_with_one_active_pipeline() {
        let (manager, _clock) = manager();
        assert_eq!(manager.len(), 1);
        assert_eq!(
            manager.active_pipeline().unwrap().name,
            "Untitled Pipeline"
        );
    }

    #[test]
    fn create_becomes_active() {
        let (mut manager, _clock) = manager();
        let id = manager.create_pipeline("Invoices");
        assert_eq!(manager.active_id(), id);
        assert_eq!(manager.len(), 2);
        assert!(manager.get(id).unwrap().graph.is_empty());
    }

    #[test]
    fn last_pipeline_cannot_be_deleted() {
        let (mut manager, _clock) = manager();
        let only = manager.active_id();
        assert_eq!(
            manager.delete_pipeline(only),
            Err(StoreError::LastPipeline)
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn deleting_the_active_pipeline_activates_the_first_survivor() {
        let (mut manager, _clock) = manager();
        let first = manager.active_id();
        let second = manager.create_pipeline("Second");
        assert_eq!(manager.active_id(), second);

        manager.delete_pipeline(second).unwrap();
        assert_eq!(manager.active_id(), first);
    }

    #[test]
    fn deleting_unknown_pipeline_reports_it() {
        let (mut manager, _clock) = manager();
        manager.create_pipeline("Second");
        let ghost = PipelineId::new();
        assert_eq!(
            manager.delete_pipeline(ghost),
            Err(StoreError::UnknownPipeline(ghost))
        );
    }

    #[test]
    fn switch_does_not_validate_existence() {
        let (mut manager, _clock) = manager();
        let ghost = PipelineId::new();
        manager.switch_pipeline(ghost);
        assert_eq!(manager.active_id(), ghost);
        assert!(manager.active_pipeline().is_none());
    }

    #[test]
    fn rename_bumps_updated_at() {
        let (mut manager, clock) = manager();
        let id = manager.active_id();
        let before = manager.get(id).unwrap().updated_at;
        clock.advance(Duration::seconds(10));

        manager.rename_pipeline(id, "Renamed");
        let pipeline = manager.get(id).unwrap();
        assert_eq!(pipeline.name, "Renamed");
        assert_eq!(pipeline.updated_at - before, Duration::seconds(10));
    }

    #[test]
    fn subscribers_hear_events_until_unsubscribed() {
        let (mut manager, _clock) = manager();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let sub = manager.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.create_pipeline("A"); // Created + Switched
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        manager.unsubscribe(sub);
        manager.create_pipeline("B");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn update_unknown_pipeline_is_ignored() {
        let (mut manager, _clock) = manager();
        manager.update_pipeline(PipelineId::new(), PipelinePatch::new().name("x"));
        assert_eq!(manager.len(), 1);
    }
}
