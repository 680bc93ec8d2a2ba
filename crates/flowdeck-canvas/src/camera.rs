//! Camera: zoom, pan, and the screen↔canvas transform
//!
//! The canvas content is rendered with `translate(pan) scale(zoom)` from the
//! pane's top-left corner, so a screen point maps to canvas space as
//! `(screen − pane_origin − pan) / zoom` and back again exactly.

use serde::{Deserialize, Serialize};

use flowdeck_core::Point;

/// Zoom and step limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Lower zoom bound
    pub min_zoom: f64,
    /// Upper zoom bound
    pub max_zoom: f64,
    /// Additive zoom change per wheel notch
    pub wheel_step: f64,
    /// Multiplicative zoom change per button press
    pub button_factor: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.2,
            max_zoom: 3.0,
            wheel_step: 0.05,
            button_factor: 1.2,
        }
    }
}

/// The viewport transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    zoom: f64,
    pan: Point,
    config: CameraConfig,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    /// Camera at zoom 1.0, pan (0,0)
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ZERO,
            config,
        }
    }

    /// Current zoom factor
    #[inline]
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset, in screen units
    #[inline]
    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Limits in effect
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Set the pan offset directly
    #[inline]
    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// One wheel tick; scrolling down zooms out, up zooms in
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 {
            -self.config.wheel_step
        } else {
            self.config.wheel_step
        };
        self.set_zoom(self.zoom + step);
    }

    /// Zoom-in button
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.config.button_factor);
    }

    /// Zoom-out button
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.config.button_factor);
    }

    /// Restore zoom 1.0 and pan (0,0)
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::ZERO;
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
    }

    /// Map a screen point into canvas space
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point, pane_origin: Point) -> Point {
        screen.minus(pane_origin).minus(self.pan).scale(1.0 / self.zoom)
    }

    /// Map a canvas point back into screen space
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point, pane_origin: Point) -> Point {
        canvas.scale(self.zoom).offset(self.pan).offset(pane_origin)
    }
}
