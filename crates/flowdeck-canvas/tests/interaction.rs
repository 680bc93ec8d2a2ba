//! End-to-end interaction scenarios and coordinate properties

use flowdeck_canvas::{Camera, CanvasController, DropPayload, PointerButton};
use flowdeck_core::{NodeStatus, Point};
use proptest::prelude::*;

#[test]
fn smart_ocr_drop_scenario() {
    // Dropping 'smart-ocr' at screen (500, 300) with zoom 1 and pan (0, 0)
    // places it at (400, 240), idle.
    let mut ctl = CanvasController::new();
    let payload = DropPayload::text("smart-ocr");
    let id = ctl
        .drop_payload(&payload, Point::new(500.0, 300.0), Point::ZERO)
        .unwrap();

    let node = ctl.model().graph().node(id).unwrap();
    assert_eq!(node.position, Point::new(400.0, 240.0));
    assert_eq!(node.status, NodeStatus::Idle);
    assert_eq!(node.agent_type_id.as_str(), "smart-ocr");
}

#[test]
fn build_a_three_stage_pipeline_by_gestures() {
    let mut ctl = CanvasController::new();
    let intake = ctl.drop_agent("document-intake".into(), Point::new(200.0, 200.0), Point::ZERO);
    let ocr = ctl.drop_agent("smart-ocr".into(), Point::new(500.0, 200.0), Point::ZERO);
    let extract = ctl.drop_agent("data-extractor".into(), Point::new(800.0, 200.0), Point::ZERO);

    ctl.start_connection(intake);
    ctl.select_node(Some(ocr));
    ctl.start_connection(ocr);
    ctl.select_node(Some(extract));

    let graph = ctl.model().graph();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.edge_between(intake, ocr).is_some());
    assert!(graph.edge_between(ocr, extract).is_some());
    assert_eq!(ctl.model().selected(), Some(extract));
}

#[test]
fn deleting_a_mid_stage_drops_both_connections() {
    let mut ctl = CanvasController::new();
    let intake = ctl.drop_agent("document-intake".into(), Point::new(200.0, 200.0), Point::ZERO);
    let ocr = ctl.drop_agent("smart-ocr".into(), Point::new(500.0, 200.0), Point::ZERO);
    let extract = ctl.drop_agent("data-extractor".into(), Point::new(800.0, 200.0), Point::ZERO);
    ctl.model_mut().add_edge(intake, ocr, None);
    ctl.model_mut().add_edge(ocr, extract, None);

    ctl.select_node(Some(ocr));
    ctl.model_mut().delete_node(ocr);

    assert_eq!(ctl.model().graph().edge_count(), 0);
    assert_eq!(ctl.model().selected(), None);
}

#[test]
fn drop_respects_camera_transform() {
    let mut ctl = CanvasController::new();
    ctl.begin_pan(Point::new(0.0, 0.0));
    ctl.pointer_move(Point::new(50.0, 30.0), Point::ZERO);
    ctl.pointer_up();

    // pan (50, 30), zoom 1: screen (500, 300) is canvas (450, 270),
    // minus the half footprint (100, 60).
    let id = ctl.drop_agent("smart-ocr".into(), Point::new(500.0, 300.0), Point::ZERO);
    assert_eq!(
        ctl.model().graph().node(id).unwrap().position,
        Point::new(350.0, 210.0)
    );
}

#[test]
fn drag_ends_on_global_pointer_up_only() {
    let mut ctl = CanvasController::new();
    let id = ctl.drop_agent("smart-ocr".into(), Point::new(500.0, 300.0), Point::ZERO);
    let start = ctl.model().graph().node(id).unwrap().position;

    ctl.begin_node_drag(id, Point::new(450.0, 280.0), Point::ZERO, PointerButton::Primary);
    ctl.pointer_move(Point::new(470.0, 300.0), Point::ZERO);
    assert!(ctl.is_dragging());
    ctl.pointer_move(Point::new(500.0, 330.0), Point::ZERO);
    ctl.pointer_up();
    assert!(!ctl.is_dragging());

    let moved = ctl.model().graph().node(id).unwrap().position;
    assert_eq!(moved, start.offset(Point::new(50.0, 50.0)));

    // Further movement after release is inert.
    ctl.pointer_move(Point::new(900.0, 900.0), Point::ZERO);
    assert_eq!(ctl.model().graph().node(id).unwrap().position, moved);
}

fn camera_at(zoom_clicks: i32, pan: Point) -> Camera {
    let mut camera = Camera::default();
    match zoom_clicks.cmp(&0) {
        std::cmp::Ordering::Greater => {
            for _ in 0..zoom_clicks {
                camera.zoom_in();
            }
        }
        std::cmp::Ordering::Less => {
            for _ in 0..(-zoom_clicks) {
                camera.zoom_out();
            }
        }
        std::cmp::Ordering::Equal => {}
    }
    camera.set_pan(pan);
    camera
}

proptest! {
    /// screen → canvas → screen round-trips at the zoom extremes and the
    /// identity, under arbitrary pan.
    #[test]
    fn coordinate_round_trip(
        zoom_clicks in prop_oneof![Just(-20i32), Just(0i32), Just(20i32)],
        pan_x in -2000.0f64..2000.0,
        pan_y in -2000.0f64..2000.0,
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        origin_x in 0.0f64..500.0,
        origin_y in 0.0f64..500.0,
    ) {
        // ±20 button clicks saturate the clamp at 0.2 / 3.0.
        let camera = camera_at(zoom_clicks, Point::new(pan_x, pan_y));
        let origin = Point::new(origin_x, origin_y);
        let screen = Point::new(x, y);

        let back = camera.canvas_to_screen(camera.screen_to_canvas(screen, origin), origin);
        prop_assert!((back.x - screen.x).abs() < 1e-6);
        prop_assert!((back.y - screen.y).abs() < 1e-6);

        let canvas = Point::new(x, y);
        let there = camera.screen_to_canvas(camera.canvas_to_screen(canvas, origin), origin);
        prop_assert!((there.x - canvas.x).abs() < 1e-6);
        prop_assert!((there.y - canvas.y).abs() < 1e-6);
    }
}
