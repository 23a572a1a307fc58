use super::*;

fn touch(id: PointerId, x: f64, y: f64) -> TouchPoint {
    TouchPoint { identifier: id, client_x: x, client_y: y }
}

// =============================================================
// Mouse adapter
// =============================================================

#[test]
fn mouse_phases_map_to_pointer_phases() {
    let cases = [
        (MouseEventKind::Down, PointerPhase::Down),
        (MouseEventKind::Move, PointerPhase::Move),
        (MouseEventKind::Up, PointerPhase::Up),
        (MouseEventKind::Leave, PointerPhase::Cancel),
    ];
    for (kind, phase) in cases {
        let ev = MouseEvent { kind, client_x: 3.0, client_y: 4.0 }.to_pointer();
        assert_eq!(ev.phase, phase);
        assert_eq!(ev.pointer_id, MOUSE_POINTER_ID);
        assert_eq!(ev.source, PointerSource::Mouse);
        assert_eq!(ev.position, Point::new(3.0, 4.0));
    }
}

// =============================================================
// Touch adapter
// =============================================================

#[test]
fn single_touch_start_becomes_pointer_down() {
    let ev = TouchEvent { phase: TouchPhase::Start, touches: vec![touch(7, 10.0, 20.0)], changed: vec![touch(7, 10.0, 20.0)] };
    let pointer = ev.to_pointer();
    assert_eq!(
        pointer,
        Some(PointerEvent {
            pointer_id: 7,
            phase: PointerPhase::Down,
            position: Point::new(10.0, 20.0),
            source: PointerSource::Touch,
        })
    );
}

#[test]
fn single_touch_move_becomes_pointer_move() {
    let ev = TouchEvent { phase: TouchPhase::Move, touches: vec![touch(7, 11.0, 21.0)], changed: vec![touch(7, 11.0, 21.0)] };
    assert_eq!(ev.to_pointer().map(|p| p.phase), Some(PointerPhase::Move));
}

#[test]
fn multi_touch_start_and_move_are_ignored() {
    let two = vec![touch(1, 0.0, 0.0), touch(2, 5.0, 5.0)];
    let start = TouchEvent { phase: TouchPhase::Start, touches: two.clone(), changed: vec![touch(2, 5.0, 5.0)] };
    let mv = TouchEvent { phase: TouchPhase::Move, touches: two, changed: vec![touch(1, 1.0, 1.0)] };
    assert!(start.to_pointer().is_none());
    assert!(mv.to_pointer().is_none());
}

#[test]
fn touch_end_uses_lifted_contact() {
    let ev = TouchEvent { phase: TouchPhase::End, touches: vec![], changed: vec![touch(7, 30.0, 5.0)] };
    let pointer = ev.to_pointer();
    assert_eq!(pointer.map(|p| p.phase), Some(PointerPhase::Up));
    assert_eq!(pointer.map(|p| p.position), Some(Point::new(30.0, 5.0)));
}

#[test]
fn touch_end_with_remaining_contacts_is_ignored() {
    let ev = TouchEvent { phase: TouchPhase::End, touches: vec![touch(1, 0.0, 0.0)], changed: vec![touch(2, 1.0, 1.0)] };
    assert!(ev.to_pointer().is_none());
}

#[test]
fn touch_cancel_becomes_pointer_cancel() {
    let ev = TouchEvent { phase: TouchPhase::Cancel, touches: vec![], changed: vec![touch(3, 0.0, 0.0)] };
    assert_eq!(ev.to_pointer().map(|p| p.phase), Some(PointerPhase::Cancel));
}

#[test]
fn empty_touch_start_is_ignored() {
    let ev = TouchEvent { phase: TouchPhase::Start, touches: vec![], changed: vec![] };
    assert!(ev.to_pointer().is_none());
}

// =============================================================
// InputState / UiState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.pointer_id(), None);
}

#[test]
fn input_state_reports_owning_pointer() {
    let state = InputState::Dragging {
        id: uuid::Uuid::new_v4(),
        pointer_id: 42,
        start: Point::new(0.0, 0.0),
        orig_x: 0.0,
        orig_y: 0.0,
    };
    assert!(!state.is_idle());
    assert_eq!(state.pointer_id(), Some(42));
}

#[test]
fn ui_state_default_is_empty() {
    let ui = UiState::default();
    assert!(ui.selected_id.is_none());
    assert!(ui.editing_id.is_none());
    assert!(!ui.menu_open);
    assert!(ui.background.is_none());
}
