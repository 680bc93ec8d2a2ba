//! Pointer gesture state
//!
//! A node drag and a canvas pan are mutually exclusive: whichever gesture
//! begins first owns the pointer until the global pointer-up.

use flowdeck_core::{NodeId, Point};

/// Which pointer button initiated a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
}

/// An in-progress node drag
///
/// `offset` is the canvas-space distance from the node's top-left corner to
/// the pointer, captured at pointer-down; each move places the node at
/// `pointer − offset` so the grab point stays under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Node being dragged
    pub node: NodeId,
    /// Pointer-to-origin offset in canvas space
    pub offset: Point,
}

impl DragState {
    /// Capture a drag at pointer-down
    #[must_use]
    pub fn begin(node: NodeId, pointer: Point, origin: Point) -> Self {
        Self {
            node,
            offset: pointer.minus(origin),
        }
    }

    /// Node position for the current pointer, clamped to the canvas
    #[must_use]
    pub fn position_for(&self, pointer: Point) -> Point {
        pointer.minus(self.offset).clamp_non_negative()
    }
}

/// An in-progress canvas pan
///
/// `grab` is `pointer − pan` at pointer-down, in screen space; each move sets
/// `pan = pointer − grab`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanState {
    grab: Point,
}

impl PanState {
    /// Capture a pan at pointer-down
    #[must_use]
    pub fn begin(pointer: Point, pan: Point) -> Self {
        Self {
            grab: pointer.minus(pan),
        }
    }

    /// Pan offset for the current pointer
    #[inline]
    #[must_use]
    pub fn pan_for(&self, pointer: Point) -> Point {
        pointer.minus(self.grab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drag_keeps_grab_point_under_cursor() {
        let drag = DragState::begin(NodeId::new(), Point::new(120.0, 90.0), Point::new(100.0, 80.0));
        assert_eq!(drag.offset, Point::new(20.0, 10.0));
        assert_eq!(
            drag.position_for(Point::new(320.0, 190.0)),
            Point::new(300.0, 180.0)
        );
    }

    #[test]
    fn drag_clamps_at_canvas_edge() {
        let drag = DragState::begin(NodeId::new(), Point::new(50.0, 50.0), Point::new(40.0, 40.0));
        assert_eq!(drag.position_for(Point::new(5.0, 200.0)), Point::new(0.0, 190.0));
    }

    #[test]
    fn pan_tracks_pointer_delta() {
        let pan = PanState::begin(Point::new(400.0, 300.0), Point::new(10.0, -5.0));
        assert_eq!(pan.pan_for(Point::new(400.0, 300.0)), Point::new(10.0, -5.0));
        assert_eq!(pan.pan_for(Point::new(450.0, 280.0)), Point::new(60.0, -25.0));
    }
}
