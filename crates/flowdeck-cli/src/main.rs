//! Flowdeck command line
//!
//! `flowdeck exercise` drives a seeded random interaction stream through a
//! wired workspace and reports invariant violations; `flowdeck demo` prints
//! the demo pipeline.

mod exercise;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{value_parser, Arg, ArgAction, Command};
use exercise::{run_exercise, ExerciseConfig};
use flowdeck_test_utils::demo_pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Command::new("flowdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Headless core of the visual pipeline builder")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("exercise")
                .about("Run the deterministic interaction exerciser")
                .arg(
                    Arg::new("operations")
                        .long("ops")
                        .default_value("1000")
                        .value_parser(value_parser!(u64))
                        .help("Number of random operations to apply"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Seed for the operation stream and the simulator"),
                )
                .arg(
                    Arg::new("stop-on-violation")
                        .long("stop-on-violation")
                        .action(ArgAction::SetTrue)
                        .help("Stop at the first invariant violation"),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Print the demo pipeline")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the full pipeline as JSON"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("exercise", args)) => {
            let config = ExerciseConfig {
                seed: *args.get_one::<u64>("seed").unwrap_or(&42),
                operations: *args.get_one::<u64>("operations").unwrap_or(&1000),
                stop_on_first_violation: args.get_flag("stop-on-violation"),
            };

            println!("Running interaction exerciser...");
            println!("Operations: {}", config.operations);
            println!("Seed: {}", config.seed);
            println!();

            let report = run_exercise(config);

            println!("Exercise Report:");
            println!("  Operations:        {}", report.operations_run);
            println!("  Nodes placed:      {}", report.nodes_placed);
            println!("  Edges created:     {}", report.edges_created);
            println!("  Nodes deleted:     {}", report.nodes_deleted);
            println!("  Pipeline switches: {}", report.pipeline_switches);
            println!("  Flushes:           {}", report.flushes);
            println!("  Violations:        {}", report.violations.len());
            for violation in &report.violations {
                println!("    op {}: {}", violation.operation, violation.detail);
            }
            println!();
            println!("Result: {}", if report.passed() { "PASS" } else { "FAIL" });

            std::process::exit(if report.passed() { 0 } else { 1 });
        }
        Some(("demo", args)) => {
            let pipeline = demo_pipeline(now());
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&pipeline)?);
            } else {
                println!("{} ({})", pipeline.name, pipeline.status);
                if let Some(description) = &pipeline.description {
                    println!("{description}");
                }
                println!();
                println!("Agents ({}):", pipeline.graph.node_count());
                for node in pipeline.graph.nodes() {
                    println!(
                        "  {:<22} at ({:>6.0}, {:>6.0})  [{}]",
                        node.agent_type_id, node.position.x, node.position.y, node.status
                    );
                }
                println!();
                println!("Connections ({}):", pipeline.graph.edge_count());
                for edge in pipeline.graph.edges() {
                    println!("  {} -> {}  \"{}\"", edge.source, edge.target, edge.display_label());
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn now() -> DateTime<Utc> {
    Utc::now()
}
