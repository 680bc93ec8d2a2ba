//! Flowdeck Graph - Pipeline graph model
//!
//! The data half of the builder core:
//! - [`Node`] and [`Edge`] records with partial-update patch types
//! - [`PipelineGraph`] over persistent (copy-on-write) collections
//! - [`GraphModel`] mutation surface: add/update/delete node (cascade +
//!   selection clear), add/delete edge (duplicate collapse), selection
//! - [`Pipeline`] envelope carrying a graph plus lifecycle metadata
//!
//! Mutations are synchronous and atomic. Operations addressed at unknown
//! identifiers are defined no-ops, not errors.

#![warn(unreachable_pub)]

pub mod edge;
pub mod error;
pub mod graph;
pub mod model;
pub mod node;
pub mod pipeline;

pub use edge::{Edge, DEFAULT_EDGE_LABEL};
pub use error::GraphError;
pub use graph::PipelineGraph;
pub use model::GraphModel;
pub use node::{Node, NodePatch};
pub use pipeline::{Pipeline, PipelinePatch};
