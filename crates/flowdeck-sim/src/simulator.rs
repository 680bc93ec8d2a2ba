//! Tick-driven simulator
//!
//! [`Simulator::start`] arms a deadline; [`Simulator::poll`] fires every tick
//! that has come due since the last call, so a caller that was away catches
//! up instead of skipping. Start is idempotent: restarting replaces any
//! previous schedule.

use crate::profile::profile_for;
use chrono::Duration;
use flowdeck_core::{Clock, NodeStatus, Timestamp};
use flowdeck_graph::{GraphModel, NodePatch};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, trace};

/// Simulator tuning
#[derive(Debug, Clone, Copy)]
pub struct SimulatorConfig {
    /// Time between metric refreshes
    pub period: Duration,
    /// Seed for the metric RNG; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            period: Duration::seconds(3),
            seed: None,
        }
    }
}

/// Periodic metric mutator for the active pipeline
pub struct Simulator {
    config: SimulatorConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    next_tick: Option<Timestamp>,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("config", &self.config)
            .field("next_tick", &self.next_tick)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Simulator over a clock; does not tick until started
    #[must_use]
    pub fn new(config: SimulatorConfig, clock: Arc<dyn Clock>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            clock,
            rng,
            next_tick: None,
        }
    }

    /// Whether a schedule is armed
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Arm (or re-arm) the tick schedule from now
    pub fn start(&mut self) {
        let deadline = self.clock.now() + self.config.period;
        debug!(%deadline, "simulator started");
        self.next_tick = Some(deadline);
    }

    /// Cancel the schedule; metrics freeze where they are
    pub fn stop(&mut self) {
        if self.next_tick.take().is_some() {
            debug!("simulator stopped");
        }
    }

    /// Fire every tick that has come due; returns how many fired
    pub fn poll(&mut self, model: &mut GraphModel) -> usize {
        let Some(mut deadline) = self.next_tick else {
            return 0;
        };
        let now = self.clock.now();
        let mut fired = 0;
        while deadline <= now {
            self.tick(model);
            deadline += self.config.period;
            fired += 1;
        }
        self.next_tick = Some(deadline);
        fired
    }

    /// Refresh the profiled metrics of every running node
    fn tick(&mut self, model: &mut GraphModel) {
        let running: Vec<_> = model
            .graph()
            .nodes()
            .filter(|n| n.status == NodeStatus::Running)
            .map(|n| (n.id, n.agent_type_id.clone(), n.metrics.clone()))
            .collect();

        for (id, agent_type_id, mut metrics) in running {
            let Some(profile) = profile_for(agent_type_id.as_str()) else {
                continue;
            };
            for (key, value) in profile.sample(&mut self.rng) {
                metrics.insert(key.to_owned(), value);
            }
            trace!(node = %id, agent_type = %agent_type_id, "metrics refreshed");
            model.update_node(id, &NodePatch::new().metrics(metrics));
        }
    }
}
