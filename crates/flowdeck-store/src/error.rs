//! Store errors

use flowdeck_core::PipelineId;
use thiserror::Error;

/// Errors surfaced by the pipeline manager and storage boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The collection invariant: at least one pipeline always exists
    #[error("cannot delete the last remaining pipeline")]
    LastPipeline,

    /// Deletion addressed a pipeline that is not in the collection
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(PipelineId),
}
