//! Wired-up workspace
//!
//! Composes the controller, manager, debounced sync, and simulator over one
//! shared [`ManualClock`], mirroring how an embedding shell wires the core.
//! [`Workspace::advance`] moves time and pumps every deadline-driven
//! component, so tests (and the CLI exerciser) never sleep.

use chrono::Duration;
use flowdeck_canvas::CanvasController;
use flowdeck_core::{Clock, ManualClock};
use flowdeck_sim::{Simulator, SimulatorConfig};
use flowdeck_store::{DebouncedSync, PipelineManager, SyncConfig};
use std::sync::Arc;

use crate::demo::demo_pipeline;

/// The whole builder core under one manual clock
pub struct Workspace {
    pub clock: ManualClock,
    pub controller: CanvasController,
    pub manager: PipelineManager,
    pub sync: DebouncedSync,
    pub simulator: Simulator,
}

impl Workspace {
    /// Workspace over one empty untitled pipeline
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::build(seed, false)
    }

    /// Workspace with the demo pipeline loaded and active
    #[must_use]
    pub fn with_demo(seed: u64) -> Self {
        Self::build(seed, true)
    }

    fn build(seed: u64, demo: bool) -> Self {
        let clock = ManualClock::new();
        let shared: Arc<ManualClock> = Arc::new(clock.clone());

        let manager = if demo {
            PipelineManager::with_pipelines(shared.clone(), vec![demo_pipeline(clock.now())])
        } else {
            PipelineManager::new(shared.clone())
        };

        let mut controller = CanvasController::new();
        if let Some(active) = manager.active_pipeline() {
            controller.load_graph(active.graph.clone());
        }

        let sync = DebouncedSync::new(SyncConfig::default(), shared.clone(), controller.model());
        let simulator = Simulator::new(
            SimulatorConfig {
                seed: Some(seed),
                ..SimulatorConfig::default()
            },
            shared,
        );

        Self {
            clock,
            controller,
            manager,
            sync,
            simulator,
        }
    }

    /// Advance time and pump the simulator and the debounced sync
    pub fn advance(&mut self, by: Duration) {
        self.clock.advance(by);
        self.pump();
    }

    /// Fire everything that has come due at the current instant
    pub fn pump(&mut self) {
        self.simulator.poll(self.controller.model_mut());
        self.sync.observe(self.controller.model());
        let target = self.manager.active_id();
        self.sync.poll(self.controller.model(), &mut self.manager, target);
    }

    /// Switch pipelines the way the shell does: reload the model and adopt
    /// the loaded graph as already persisted
    pub fn switch_to(&mut self, id: flowdeck_core::PipelineId) {
        self.manager.switch_pipeline(id);
        let graph = self
            .manager
            .active_pipeline()
            .map(|p| p.graph.clone())
            .unwrap_or_default();
        self.controller.load_graph(graph);
        self.sync.mark_clean(self.controller.model());
    }
}
