//! Flowdeck Core - Shared foundation types
//!
//! Defines the vocabulary every other Flowdeck crate speaks:
//! - Newtype identifiers for nodes, edges, pipelines, and agent types
//! - Canvas geometry (points, node footprint)
//! - Status enums for nodes and pipelines
//! - The injectable [`Clock`] abstraction used by the simulator and the
//!   debounced sync so tests can advance virtual time deterministically

#![warn(unreachable_pub)]

pub mod clock;
pub mod geometry;
pub mod ids;
pub mod status;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use geometry::{Point, NODE_HEIGHT, NODE_WIDTH};
pub use ids::{AgentTypeId, EdgeId, NodeId, PipelineId};
pub use status::{NodeStatus, PipelineStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
