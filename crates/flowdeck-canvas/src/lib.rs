//! Flowdeck Canvas - Interaction engine
//!
//! The behavior half of the builder core, layered over `flowdeck-graph`:
//! - [`Camera`]: zoom/pan with the screen↔canvas coordinate transform
//! - [`ConnectMode`]: the two-click edge-creation state machine
//! - [`CanvasController`]: pointer protocol (drop placement, node drag,
//!   background pan, selection) wired into a [`GraphModel`]
//!
//! The controller consumes already-dispatched pointer events in screen
//! coordinates; hit-testing and event routing belong to the rendering layer.
//!
//! [`GraphModel`]: flowdeck_graph::GraphModel

#![warn(unreachable_pub)]

pub mod camera;
pub mod connect;
pub mod controller;
pub mod drag;
pub mod payload;

pub use camera::{Camera, CameraConfig};
pub use connect::ConnectMode;
pub use controller::CanvasController;
pub use drag::{DragState, PanState, PointerButton};
pub use payload::DropPayload;
