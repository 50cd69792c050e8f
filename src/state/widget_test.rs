use super::*;

fn panel() -> Size {
    Size {
        width: 384.0,
        height: 400.0,
    }
}

fn viewport() -> Size {
    Size {
        width: 1280.0,
        height: 800.0,
    }
}

// =============================================================
// clamp_to_viewport
// =============================================================

#[test]
fn clamp_keeps_interior_point_unchanged() {
    let pos = clamp_to_viewport(100.0, 120.0, panel(), viewport());
    assert_eq!(pos, Position { x: 100.0, y: 120.0 });
}

#[test]
fn clamp_floors_negative_coordinates_at_zero() {
    let pos = clamp_to_viewport(-50.0, -1.0, panel(), viewport());
    assert_eq!(pos, Position { x: 0.0, y: 0.0 });
}

#[test]
fn clamp_caps_at_viewport_minus_panel() {
    let pos = clamp_to_viewport(5000.0, 5000.0, panel(), viewport());
    assert_eq!(pos.x, viewport().width - panel().width);
    assert_eq!(pos.y, viewport().height - panel().height);
}

#[test]
fn clamp_bounds_hold_for_many_points() {
    let max_x = viewport().width - panel().width;
    let max_y = viewport().height - panel().height;
    for step in -10..30 {
        let raw = f64::from(step) * 97.0;
        let pos = clamp_to_viewport(raw, raw, panel(), viewport());
        assert!(pos.x >= 0.0 && pos.x <= max_x, "x out of bounds: {pos:?}");
        assert!(pos.y >= 0.0 && pos.y <= max_y, "y out of bounds: {pos:?}");
    }
}

#[test]
fn clamp_pins_oversized_panel_to_origin() {
    let small_view = Size {
        width: 300.0,
        height: 200.0,
    };
    let pos = clamp_to_viewport(150.0, 150.0, panel(), small_view);
    assert_eq!(pos, Position { x: 0.0, y: 0.0 });
}

// =============================================================
// anchored_position
// =============================================================

#[test]
fn anchor_rests_against_bottom_right_with_margin() {
    let pos = anchored_position(panel(), viewport());
    assert_eq!(pos.x, viewport().width - panel().width - ANCHOR_MARGIN);
    assert_eq!(pos.y, viewport().height - panel().height - ANCHOR_MARGIN);
}

#[test]
fn anchor_clamps_in_tiny_viewport() {
    let small_view = Size {
        width: 320.0,
        height: 380.0,
    };
    let pos = anchored_position(panel(), small_view);
    assert_eq!(pos, Position { x: 0.0, y: 0.0 });
}

// =============================================================
// WidgetState drag lifecycle
// =============================================================

#[test]
fn default_state_is_closed_and_idle() {
    let state = WidgetState::default();
    assert!(!state.open);
    assert!(!state.dragging);
}

#[test]
fn begin_drag_captures_offset_from_panel_origin() {
    let mut state = WidgetState {
        position: Position { x: 200.0, y: 300.0 },
        ..WidgetState::default()
    };
    state.begin_drag(Position { x: 250.0, y: 320.0 });
    assert!(state.dragging);

    state.drag_to(Position { x: 400.0, y: 500.0 }, panel(), viewport());
    assert_eq!(state.position, Position { x: 350.0, y: 480.0 });
}

#[test]
fn drag_to_is_ignored_when_not_dragging() {
    let mut state = WidgetState {
        position: Position { x: 10.0, y: 10.0 },
        ..WidgetState::default()
    };
    state.drag_to(Position { x: 600.0, y: 600.0 }, panel(), viewport());
    assert_eq!(state.position, Position { x: 10.0, y: 10.0 });
}

#[test]
fn drag_clamps_to_viewport_bounds() {
    let mut state = WidgetState::default();
    state.begin_drag(Position { x: 0.0, y: 0.0 });
    state.drag_to(
        Position {
            x: 99999.0,
            y: -99999.0,
        },
        panel(),
        viewport(),
    );
    assert_eq!(state.position.x, viewport().width - panel().width);
    assert_eq!(state.position.y, 0.0);
}

#[test]
fn end_drag_returns_to_idle() {
    let mut state = WidgetState::default();
    state.begin_drag(Position { x: 5.0, y: 5.0 });
    state.end_drag();
    assert!(!state.dragging);
}

#[test]
fn reset_position_is_idempotent() {
    let mut state = WidgetState::default();
    state.reset_position(panel(), viewport());
    let first = state.position;
    state.reset_position(panel(), viewport());
    assert_eq!(state.position, first);
}

#[test]
fn reset_after_drag_snaps_back_to_corner() {
    let mut state = WidgetState::default();
    state.reset_position(panel(), viewport());
    state.begin_drag(state.position);
    state.drag_to(Position { x: 40.0, y: 30.0 }, panel(), viewport());
    state.end_drag();

    state.reset_position(panel(), viewport());
    assert_eq!(state.position, anchored_position(panel(), viewport()));
}

#[test]
fn reset_tracks_a_shrunken_viewport() {
    let mut state = WidgetState::default();
    state.reset_position(panel(), viewport());

    let shrunk = Size {
        width: 900.0,
        height: 600.0,
    };
    state.reset_position(panel(), shrunk);
    assert_eq!(state.position, anchored_position(panel(), shrunk));
    assert_eq!(state.position.x, shrunk.width - panel().width - ANCHOR_MARGIN);
    assert_eq!(state.position.y, shrunk.height - panel().height - ANCHOR_MARGIN);
}
