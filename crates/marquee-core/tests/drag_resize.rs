// File: crates/marquee-core/tests/drag_resize.rs
// Purpose: Validate drag/resize gesture sessions: clamps, commits, cancels.

use marquee_core::drag::{DragResizeEngine, GestureSample, GestureState, SelectionRect};
use marquee_core::geometry::OverlayBounds;
use marquee_core::types::{PostSelectionOptions, MIN_BOX_SIZE, PERIMETER_SELECTION_PADDING_PX};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn engine_with_box(left: f64, top: f64, width: f64, height: f64) -> DragResizeEngine {
    let mut engine = DragResizeEngine::new(OverlayBounds::sized(W, H));
    engine.render_selection(SelectionRect::new(left / W, top / H, width / W, height / H));
    engine
}

fn down_at(x: f64, y: f64) -> GestureSample {
    GestureSample {
        state: GestureState::Starting,
        start_x: x,
        start_y: y,
        client_x: x,
        client_y: y,
    }
}

fn move_to(start: (f64, f64), client: (f64, f64)) -> GestureSample {
    GestureSample {
        state: GestureState::Dragging,
        start_x: start.0,
        start_y: start.1,
        client_x: client.0,
        client_y: client.1,
    }
}

fn selection_px(engine: &DragResizeEngine) -> (f64, f64, f64, f64) {
    let s = engine.selection().expect("selection visible");
    (s.left * W, s.top * H, s.width * W, s.height * H)
}

fn assert_near(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn overdragged_top_left_corner_clamps_to_min_box() {
    let mut engine = engine_with_box(10.0, 10.0, 100.0, 70.0);
    assert!(engine.handle_down_gesture(&down_at(10.0, 10.0)));
    engine.handle_drag_gesture(&move_to((10.0, 10.0), (210.0, 210.0)));
    let committed = engine.handle_up_gesture().expect("box changed");

    let (left, top, width, height) = selection_px(&engine);
    assert_near(width, MIN_BOX_SIZE);
    assert_near(height, MIN_BOX_SIZE);
    // Anchored at the fixed bottom-right corner (110, 80).
    assert_near(left + width, 110.0);
    assert_near(top + height, 80.0);
    assert_eq!(Some(committed), engine.selection());
}

#[test]
fn zero_delta_body_drag_does_not_request_selection() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    // Middle of the body, away from every corner affordance.
    assert!(engine.handle_down_gesture(&down_at(200.0, 175.0)));
    engine.handle_drag_gesture(&move_to((200.0, 175.0), (200.0, 175.0)));
    assert_eq!(engine.handle_up_gesture(), None);
    let (left, top, width, height) = selection_px(&engine);
    assert_near(left, 100.0);
    assert_near(top, 100.0);
    assert_near(width, 200.0);
    assert_near(height, 150.0);
}

#[test]
fn body_drag_translates_and_clamps_to_padded_perimeter() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    assert!(engine.handle_down_gesture(&down_at(200.0, 175.0)));
    // Shove the box far past the bottom-right of the parent.
    engine.handle_drag_gesture(&move_to((200.0, 175.0), (2000.0, 2000.0)));
    assert!(engine.handle_up_gesture().is_some());

    let (left, top, width, height) = selection_px(&engine);
    assert_near(width, 200.0);
    assert_near(height, 150.0);
    assert_near(left + width, W - PERIMETER_SELECTION_PADDING_PX);
    assert_near(top + height, H - PERIMETER_SELECTION_PADDING_PX);
}

#[test]
fn corner_drag_respects_padded_perimeter() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    assert!(engine.handle_down_gesture(&down_at(100.0, 100.0)));
    engine.handle_drag_gesture(&move_to((100.0, 100.0), (-500.0, -500.0)));
    assert!(engine.handle_up_gesture().is_some());

    let (left, top, width, height) = selection_px(&engine);
    assert_near(left, PERIMETER_SELECTION_PADDING_PX);
    assert_near(top, PERIMETER_SELECTION_PADDING_PX);
    // The opposite corner never moved.
    assert_near(left + width, 300.0);
    assert_near(top + height, 250.0);
}

#[test]
fn bottom_right_drag_moves_only_adjacent_edges() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    assert!(engine.handle_down_gesture(&down_at(300.0, 250.0)));
    engine.handle_drag_gesture(&move_to((300.0, 250.0), (340.0, 220.0)));
    assert!(engine.handle_up_gesture().is_some());

    let (left, top, width, height) = selection_px(&engine);
    assert_near(left, 100.0);
    assert_near(top, 100.0);
    assert_near(width, 240.0);
    assert_near(height, 120.0);
}

#[test]
fn down_gesture_needs_a_draggable_affordance() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    // Well outside the box and all corners.
    assert!(!engine.handle_down_gesture(&down_at(700.0, 500.0)));
    // Far inside but body dragging disabled.
    let mut no_body = DragResizeEngine::with_options(
        OverlayBounds::sized(W, H),
        PostSelectionOptions { enable_body_drag: false, ..Default::default() },
    );
    no_body.render_selection(SelectionRect::new(100.0 / W, 100.0 / H, 200.0 / W, 150.0 / H));
    assert!(!no_body.handle_down_gesture(&down_at(200.0, 175.0)));
    // Corners still grab when body drags are off.
    assert!(no_body.handle_down_gesture(&down_at(300.0, 250.0)));
}

#[test]
fn near_corner_grab_within_radius() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    // 10 px off the top-right corner, inside the default grab radius.
    assert!(engine.handle_down_gesture(&down_at(306.0, 92.0)));
    engine.handle_drag_gesture(&move_to((306.0, 92.0), (306.0 + 50.0, 92.0)));
    assert!(engine.handle_up_gesture().is_some());
    let (left, top, width, height) = selection_px(&engine);
    assert_near(left, 100.0);
    assert_near(top, 100.0);
    assert_near(width, 250.0);
    assert_near(height, 150.0);
}

#[test]
fn down_gesture_requires_a_starting_sample() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    let mut sample = down_at(300.0, 250.0);
    sample.state = GestureState::Finished;
    assert!(!engine.handle_down_gesture(&sample));
    sample.state = GestureState::Dragging;
    assert!(!engine.handle_down_gesture(&sample));
    // The same position with the right tag still grabs the corner.
    assert!(engine.handle_down_gesture(&down_at(300.0, 250.0)));
}

#[test]
fn bounds_update_mid_gesture_applies_to_the_commit() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    assert!(engine.handle_down_gesture(&down_at(300.0, 250.0)));
    engine.handle_drag_gesture(&move_to((300.0, 250.0), (320.0, 270.0)));
    // Host resize mid-gesture; the commit normalizes against the new size.
    engine.set_bounds(OverlayBounds::sized(400.0, 300.0));
    let committed = engine.handle_up_gesture().expect("box changed");
    assert!((committed.left - 100.0 / 400.0).abs() < 1e-9);
    assert!((committed.top - 100.0 / 300.0).abs() < 1e-9);
    assert!((committed.width - 220.0 / 400.0).abs() < 1e-9);
    assert!((committed.height - 170.0 / 300.0).abs() < 1e-9);
}

#[test]
fn drag_and_up_without_down_are_ignored() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    let before = engine.selection();
    engine.handle_drag_gesture(&move_to((0.0, 0.0), (400.0, 400.0)));
    assert_eq!(engine.selection(), before);
    assert_eq!(engine.handle_up_gesture(), None);
}

#[test]
fn degenerate_render_hides_box_and_blocks_gestures() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    engine.render_selection(SelectionRect::new(0.0, 0.0, -1.0, -1.0));
    assert!(!engine.has_selection());
    assert!(!engine.handle_down_gesture(&down_at(100.0, 100.0)));
    // A valid render re-arms the engine.
    engine.render_selection(SelectionRect::new(0.25, 0.25, 0.25, 0.25));
    assert!(engine.handle_down_gesture(&down_at(0.25 * W, 0.25 * H)));
}

#[test]
fn cancel_restores_the_origin_box() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    let before = engine.selection().unwrap();
    assert!(engine.handle_down_gesture(&down_at(300.0, 250.0)));
    engine.handle_drag_gesture(&move_to((300.0, 250.0), (400.0, 400.0)));
    engine.cancel_gesture();
    let after = engine.selection().unwrap();
    assert!((after.left - before.left).abs() < 1e-9);
    assert!((after.top - before.top).abs() < 1e-9);
    assert!((after.width - before.width).abs() < 1e-9);
    assert!((after.height - before.height).abs() < 1e-9);
    // The abandoned gesture must not leave the engine dragging.
    assert_eq!(engine.handle_up_gesture(), None);
}

#[test]
fn clear_selection_forces_idle_mid_gesture() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    assert!(engine.handle_down_gesture(&down_at(300.0, 250.0)));
    engine.clear_selection();
    assert!(!engine.has_selection());
    assert_eq!(engine.handle_up_gesture(), None);
}

#[test]
fn commit_seeds_the_next_gesture() {
    let mut engine = engine_with_box(100.0, 100.0, 200.0, 150.0);
    assert!(engine.handle_down_gesture(&down_at(300.0, 250.0)));
    engine.handle_drag_gesture(&move_to((300.0, 250.0), (320.0, 270.0)));
    assert!(engine.handle_up_gesture().is_some());

    // Second gesture grabs the corner at its new position.
    assert!(engine.handle_down_gesture(&down_at(320.0, 270.0)));
    engine.handle_drag_gesture(&move_to((320.0, 270.0), (320.0, 270.0)));
    assert_eq!(engine.handle_up_gesture(), None);
}
