//! Deterministic interaction exerciser
//!
//! Drives a seeded stream of random canvas and manager operations through a
//! fully wired workspace, checking the core invariants after every step:
//! - no edge references a missing node
//! - no node sits at negative coordinates
//! - at most one edge per ordered (source, target) pair
//! - zoom stays inside its clamp
//! - the pipeline collection never empties

use chrono::Duration;
use flowdeck_canvas::PointerButton;
use flowdeck_catalog::Catalog;
use flowdeck_core::Point;
use flowdeck_test_utils::Workspace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::info;

/// Exerciser tuning
#[derive(Debug, Clone, Copy)]
pub struct ExerciseConfig {
    pub seed: u64,
    pub operations: u64,
    pub stop_on_first_violation: bool,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            operations: 1000,
            stop_on_first_violation: false,
        }
    }
}

/// One detected invariant violation
#[derive(Debug, Clone)]
pub struct Violation {
    pub operation: u64,
    pub detail: String,
}

/// Outcome of an exerciser run
#[derive(Debug, Default)]
pub struct ExerciseReport {
    pub operations_run: u64,
    pub nodes_placed: u64,
    pub edges_created: u64,
    pub nodes_deleted: u64,
    pub pipeline_switches: u64,
    pub flushes: u64,
    pub violations: Vec<Violation>,
}

impl ExerciseReport {
    /// Whether the run finished without violations
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run the exerciser
#[must_use]
pub fn run_exercise(config: ExerciseConfig) -> ExerciseReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut ws = Workspace::with_demo(config.seed);
    ws.simulator.start();

    let slugs: Vec<String> = Catalog::builtin()
        .iter()
        .map(|a| a.id.as_str().to_owned())
        .collect();

    let mut report = ExerciseReport::default();

    for op in 0..config.operations {
        apply_random_op(&mut ws, &mut rng, &slugs, &mut report);
        ws.pump();
        check_invariants(&ws, op, &mut report);
        if config.stop_on_first_violation && !report.passed() {
            report.operations_run = op + 1;
            return report;
        }
    }

    // Let pending work settle, then re-check once more.
    ws.advance(Duration::seconds(5));
    check_invariants(&ws, config.operations, &mut report);

    report.operations_run = config.operations;
    report.flushes = ws.sync.flush_count();
    info!(
        operations = report.operations_run,
        violations = report.violations.len(),
        "exercise finished"
    );
    report
}

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(-200.0..1800.0), rng.gen_range(-200.0..1200.0))
}

fn random_node(ws: &Workspace, rng: &mut StdRng) -> Option<flowdeck_core::NodeId> {
    let ids: Vec<_> = ws.controller.model().graph().nodes().map(|n| n.id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids[rng.gen_range(0..ids.len())])
    }
}

fn apply_random_op(
    ws: &mut Workspace,
    rng: &mut StdRng,
    slugs: &[String],
    report: &mut ExerciseReport,
) {
    match rng.gen_range(0..100u32) {
        // Drop a random agent somewhere, possibly off the top-left edge.
        0..=19 => {
            let slug = &slugs[rng.gen_range(0..slugs.len())];
            ws.controller
                .drop_agent(slug.as_str().into(), random_point(rng), Point::ZERO);
            report.nodes_placed += 1;
        }
        // Drag a node around.
        20..=39 => {
            if let Some(id) = random_node(ws, rng) {
                let grab = random_point(rng);
                ws.controller
                    .begin_node_drag(id, grab, Point::ZERO, PointerButton::Primary);
                for _ in 0..rng.gen_range(1..5) {
                    ws.controller.pointer_move(random_point(rng), Point::ZERO);
                }
                ws.controller.pointer_up();
            }
        }
        // Two-click connect between random nodes (sometimes the same one).
        40..=54 => {
            if let (Some(a), Some(b)) = (random_node(ws, rng), random_node(ws, rng)) {
                ws.controller.start_connection(a);
                ws.controller.select_node(Some(b));
                if a != b {
                    report.edges_created += 1;
                }
            }
        }
        // Delete a node.
        55..=64 => {
            if let Some(id) = random_node(ws, rng) {
                ws.controller.model_mut().delete_node(id);
                report.nodes_deleted += 1;
            }
        }
        // Pan and zoom.
        65..=74 => {
            ws.controller.begin_pan(random_point(rng));
            ws.controller.pointer_move(random_point(rng), Point::ZERO);
            ws.controller.pointer_up();
            for _ in 0..rng.gen_range(0..30) {
                ws.controller.wheel(if rng.gen_bool(0.5) { 1.0 } else { -1.0 });
            }
        }
        // Pipeline churn: create, switch around, delete one.
        75..=84 => {
            let id = ws.manager.create_pipeline(format!("Pipeline {}", rng.gen_range(0..1000)));
            ws.switch_to(id);
            report.pipeline_switches += 1;
        }
        85..=89 => {
            let ids: Vec<_> = ws.manager.pipelines().map(|p| p.id).collect();
            let victim = ids[rng.gen_range(0..ids.len())];
            let was_active = ws.manager.active_id() == victim;
            // Refusal on the last pipeline is expected, not a violation.
            if ws.manager.delete_pipeline(victim).is_ok() && was_active {
                let next = ws.manager.active_id();
                ws.switch_to(next);
                report.pipeline_switches += 1;
            }
        }
        // Background click, escape, or just time passing.
        90..=94 => {
            ws.controller.background_click();
            ws.controller.escape_pressed();
        }
        _ => {
            ws.advance(Duration::milliseconds(rng.gen_range(0..4000)));
        }
    }
}

fn check_invariants(ws: &Workspace, op: u64, report: &mut ExerciseReport) {
    let graph = ws.controller.model().graph();

    for edge in graph.edges() {
        if !graph.contains_node(edge.source) || !graph.contains_node(edge.target) {
            report.violations.push(Violation {
                operation: op,
                detail: format!("edge {} references a missing node", edge.id),
            });
        }
    }

    let mut pairs = HashSet::new();
    for edge in graph.edges() {
        if !pairs.insert((edge.source, edge.target)) {
            report.violations.push(Violation {
                operation: op,
                detail: format!("duplicate edge pair {} -> {}", edge.source, edge.target),
            });
        }
    }

    for node in graph.nodes() {
        if node.position.x < 0.0 || node.position.y < 0.0 {
            report.violations.push(Violation {
                operation: op,
                detail: format!("node {} at negative position", node.id),
            });
        }
    }

    let zoom = ws.controller.camera().zoom();
    let limits = ws.controller.camera().config();
    if !(limits.min_zoom..=limits.max_zoom).contains(&zoom) {
        report.violations.push(Violation {
            operation: op,
            detail: format!("zoom {zoom} escaped its clamp"),
        });
    }

    if ws.manager.is_empty() {
        report.violations.push(Violation {
            operation: op,
            detail: "pipeline collection emptied".to_owned(),
        });
    }
}
