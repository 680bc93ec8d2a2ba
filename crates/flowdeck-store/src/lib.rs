//! Flowdeck Store - Pipeline management and the storage boundary
//!
//! Three layers:
//! - [`PipelineManager`]: the ordered, always-non-empty pipeline collection
//!   with active-pipeline tracking and subscriber notification
//! - [`DebouncedSync`]: coalesces rapid graph mutations into one write-back
//!   per settle window, with an observable dirty marker
//! - [`Storage`]: the persistence trait (four entity kinds, soft foreign
//!   keys) and its in-memory implementation

#![warn(unreachable_pub)]

pub mod error;
pub mod manager;
pub mod records;
pub mod storage;
pub mod sync;

pub use error::StoreError;
pub use manager::{ManagerEvent, PipelineManager, SubscriptionId};
pub use records::{
    AgentRecord, ConnectionRecord, NewAgentRecord, NewConnectionRecord, NewNodeRecord,
    NewPipeline, NodeRecord,
};
pub use storage::{MemStorage, Storage};
pub use sync::{DebouncedSync, SyncConfig};
