//! Flowdeck Catalog - Static agent-type registry
//!
//! The catalog maps agent-type slugs to display metadata and default
//! configurations. It is read-only at runtime and consumed by:
//! - node rendering (icon, color, name)
//! - the properties panel (configuration schema dispatched by subtype)
//! - the library listing (category filter, case-insensitive search)
//!
//! A node may reference a slug that is absent from the catalog; lookups
//! return `None` and consumers omit the node rather than failing.

#![warn(unreachable_pub)]

pub mod agent_type;
pub mod builtin;
pub mod catalog;
pub mod schema;
pub mod subtype;

pub use agent_type::{AgentCategory, AgentType};
pub use catalog::Catalog;
pub use schema::{ConfigField, ConfigSchema, FieldKind};
pub use subtype::AgentSubtype;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
