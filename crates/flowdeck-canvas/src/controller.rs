//! Canvas controller
//!
//! Owns the graph model for the active pipeline plus all ephemeral
//! interaction state, and turns pointer events into graph mutations.
//! Invariants enforced here:
//! - a node drag and a canvas pan never run at the same time
//! - selecting while connect mode is armed completes or cancels the
//!   connection before the selection lands
//! - dropped and dragged nodes never end up at negative coordinates

use crate::camera::{Camera, CameraConfig};
use crate::connect::ConnectMode;
use crate::drag::{DragState, PanState, PointerButton};
use crate::payload::DropPayload;
use flowdeck_catalog::Catalog;
use flowdeck_core::{AgentTypeId, NodeId, Point, NODE_HEIGHT, NODE_WIDTH};
use flowdeck_graph::{GraphModel, Node, NodePatch, PipelineGraph};
use tracing::{debug, warn};

/// Interaction engine over the active pipeline's graph
#[derive(Debug, Clone)]
pub struct CanvasController {
    model: GraphModel,
    camera: Camera,
    connect: ConnectMode,
    drag: Option<DragState>,
    pan: Option<PanState>,
    catalog: Catalog,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    /// Controller over an empty graph and the built-in catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin().clone())
    }

    /// Controller with an explicit catalog
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            model: GraphModel::new(),
            camera: Camera::new(CameraConfig::default()),
            connect: ConnectMode::Idle,
            drag: None,
            pan: None,
            catalog,
        }
    }

    /// The underlying graph model
    #[inline]
    #[must_use]
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// Mutable access for non-pointer mutations (properties panel, simulator)
    #[inline]
    pub fn model_mut(&mut self) -> &mut GraphModel {
        &mut self.model
    }

    /// The camera
    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Connect-mode state
    #[inline]
    #[must_use]
    pub fn connect_mode(&self) -> ConnectMode {
        self.connect
    }

    /// Whether a node drag is in progress
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a canvas pan is in progress
    #[inline]
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Replace the graph, e.g. when the active pipeline switches
    ///
    /// Ephemeral gestures do not survive a reload.
    pub fn load_graph(&mut self, graph: PipelineGraph) {
        self.connect.cancel();
        self.drag = None;
        self.pan = None;
        self.model.load(graph);
    }

    // --- Drop placement -----------------------------------------------------

    /// Decode a drop payload and place the node centered under the pointer
    ///
    /// Returns `None` when no agent slug can be decoded.
    pub fn drop_payload(
        &mut self,
        payload: &DropPayload,
        screen: Point,
        pane_origin: Point,
    ) -> Option<NodeId> {
        let Some(agent_type_id) = payload.agent_type_id() else {
            warn!("drop ignored: payload carries no agent type");
            return None;
        };
        Some(self.drop_agent(agent_type_id, screen, pane_origin))
    }

    /// Place a node of the given type centered under the pointer
    ///
    /// The drop point maps through the camera into canvas space, then shifts
    /// by half the node footprint so the node lands centered, floored at
    /// zero per axis. Unknown slugs still place a node (the reference is
    /// soft); they just start without catalog defaults.
    pub fn drop_agent(
        &mut self,
        agent_type_id: AgentTypeId,
        screen: Point,
        pane_origin: Point,
    ) -> NodeId {
        let canvas = self.camera.screen_to_canvas(screen, pane_origin);
        let position = canvas
            .minus(Point::new(NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0))
            .clamp_non_negative();

        let mut node = Node::new(agent_type_id.clone(), position);
        match self.catalog.get(&agent_type_id) {
            Some(agent) => {
                node = node.with_configuration(agent.default_configuration.clone());
            }
            None => warn!(agent_type = %agent_type_id, "placing node with unknown agent type"),
        }
        debug!(agent_type = %agent_type_id, ?position, "drop agent");
        self.model.add_node(node)
    }

    // --- Selection and connect mode -----------------------------------------

    /// Select a node (or clear with `None`), completing or cancelling an
    /// armed connection first
    ///
    /// While connecting: a different node becomes the target of a new edge;
    /// the source itself, or anything else, just disarms the mode. The
    /// selection lands either way.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        if let Some(from) = self.connect.source() {
            match id {
                Some(target) if target != from => {
                    self.model.add_edge(from, target, None);
                    debug!(%from, %target, "connection completed");
                }
                _ => debug!(%from, "connection cancelled by selection"),
            }
            self.connect.cancel();
        }
        self.model.select_node(id);
    }

    /// Arm connect mode from a node's connect affordance
    pub fn start_connection(&mut self, from: NodeId) {
        debug!(%from, "connection armed");
        self.connect.start(from);
    }

    /// Disarm connect mode unconditionally
    pub fn cancel_connection(&mut self) {
        self.connect.cancel();
    }

    /// Escape key: cancels an armed connection, nothing else
    pub fn escape_pressed(&mut self) {
        if self.connect.is_connecting() {
            self.connect.cancel();
        }
    }

    /// Click on empty canvas: cancels a connection, otherwise clears the
    /// selection; swallowed while a pan is settling
    pub fn background_click(&mut self) {
        if self.pan.is_some() {
            return;
        }
        if self.connect.is_connecting() {
            self.connect.cancel();
        } else {
            self.model.select_node(None);
        }
    }

    // --- Pointer gestures ---------------------------------------------------

    /// Pointer-down on a node body: begins a drag with the primary button
    ///
    /// Ignored for other buttons, unknown nodes, or while panning.
    pub fn begin_node_drag(
        &mut self,
        id: NodeId,
        screen: Point,
        pane_origin: Point,
        button: PointerButton,
    ) {
        if button != PointerButton::Primary || self.pan.is_some() {
            return;
        }
        let Some(node) = self.model.graph().node(id) else {
            return;
        };
        let pointer = self.camera.screen_to_canvas(screen, pane_origin);
        self.drag = Some(DragState::begin(id, pointer, node.position));
    }

    /// Pointer-down on the canvas background: begins a pan
    ///
    /// Ignored while a node drag owns the pointer.
    pub fn begin_pan(&mut self, screen: Point) {
        if self.drag.is_some() {
            return;
        }
        self.pan = Some(PanState::begin(screen, self.camera.pan()));
    }

    /// Pointer movement, routed to whichever gesture is active
    pub fn pointer_move(&mut self, screen: Point, pane_origin: Point) {
        if let Some(drag) = self.drag {
            let pointer = self.camera.screen_to_canvas(screen, pane_origin);
            let position = drag.position_for(pointer);
            self.model
                .update_node(drag.node, &NodePatch::new().position(position));
        } else if let Some(pan) = self.pan {
            self.camera.set_pan(pan.pan_for(screen));
        }
    }

    /// Global pointer-up: ends any active gesture
    pub fn pointer_up(&mut self) {
        self.drag = None;
        self.pan = None;
    }

    // --- Camera controls ----------------------------------------------------

    /// Wheel tick over the canvas
    pub fn wheel(&mut self, delta_y: f64) {
        self.camera.wheel(delta_y);
    }

    /// Zoom-in button
    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    /// Zoom-out button
    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    /// Reset-view button
    pub fn reset_view(&mut self) {
        self.camera.reset();
    }
}
