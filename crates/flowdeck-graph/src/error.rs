//! Graph errors

use thiserror::Error;

/// Errors surfaced by the graph layer
///
/// The mutation surface itself treats unknown identifiers as no-ops; errors
/// only arise at the serialization boundary.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to decode graph snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}
