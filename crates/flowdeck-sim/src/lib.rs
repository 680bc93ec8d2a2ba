//! Flowdeck Sim - Metrics simulator
//!
//! Periodically replaces the display metrics of every `Running` node with
//! fresh pseudo-random values in agent-type-specific ranges, so a pipeline
//! looks alive without any real execution behind it.
//!
//! The schedule is a deadline against the injected [`Clock`]: callers pump
//! [`Simulator::poll`] from their event loop, and tests drive a
//! [`ManualClock`] instead of sleeping.
//!
//! [`Clock`]: flowdeck_core::Clock
//! [`ManualClock`]: flowdeck_core::ManualClock

#![warn(unreachable_pub)]

pub mod profile;
pub mod simulator;

pub use profile::{profile_for, MetricField, MetricProfile};
pub use simulator::{Simulator, SimulatorConfig};
