//! Flowdeck Test Utils - Shared fixtures
//!
//! - [`demo_pipeline`]: the eleven-node document-processing showcase used by
//!   demos and integration tests
//! - [`Workspace`]: a fully wired builder core (controller, manager,
//!   debounced sync, simulator) over one shared manual clock, for
//!   deterministic end-to-end tests

pub mod demo;
pub mod workspace;

pub use demo::demo_pipeline;
pub use workspace::Workspace;
