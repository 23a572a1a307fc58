//! Input model: the unified pointer event, per-source adapters, and the
//! gesture state machine.
//!
//! Mouse and touch input are translated into one [`PointerEvent`] shape
//! before they reach the editor, so drag and resize logic exists once.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to compute deltas from the
//! gesture's start and to revert the shape if the gesture is cancelled.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::hit::ResizeAnchor;
use crate::shape::ShapeId;
use crate::surface::Point;

/// Identifier of one pointer (the mouse, or one touch contact).
pub type PointerId = i64;

/// Pointer id the mouse adapter reports.
pub const MOUSE_POINTER_ID: PointerId = 1;

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The host lost the pointer (capture lost, window blur, touch cancel).
    Cancel,
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A single input sample in client coordinates, independent of its device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
    pub source: PointerSource,
}

/// Raw mouse event kinds as delivered by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down,
    Move,
    Up,
    /// The mouse left the window mid-gesture.
    Leave,
}

/// A raw mouse event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub client_x: f64,
    pub client_y: f64,
}

impl MouseEvent {
    /// Translate into the unified pointer model.
    #[must_use]
    pub fn to_pointer(self) -> PointerEvent {
        let phase = match self.kind {
            MouseEventKind::Down => PointerPhase::Down,
            MouseEventKind::Move => PointerPhase::Move,
            MouseEventKind::Up => PointerPhase::Up,
            MouseEventKind::Leave => PointerPhase::Cancel,
        };
        PointerEvent {
            pointer_id: MOUSE_POINTER_ID,
            phase,
            position: Point::new(self.client_x, self.client_y),
            source: PointerSource::Mouse,
        }
    }
}

/// Raw touch event kinds as delivered by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One contact point of a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub identifier: PointerId,
    pub client_x: f64,
    pub client_y: f64,
}

/// A raw touch event.
///
/// `touches` lists contacts still on the surface; `changed` lists the
/// contacts this event is about (for `End`, the lifted ones).
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
    pub changed: Vec<TouchPoint>,
}

impl TouchEvent {
    /// Translate into the unified pointer model.
    ///
    /// Returns `None` for multi-touch: any event with more than one contact
    /// on the surface, or lifting several contacts at once, is ignored.
    #[must_use]
    pub fn to_pointer(&self) -> Option<PointerEvent> {
        let (phase, contact) = match self.phase {
            TouchPhase::Start | TouchPhase::Move => {
                let [only] = self.touches.as_slice() else {
                    return None;
                };
                let phase = if self.phase == TouchPhase::Start { PointerPhase::Down } else { PointerPhase::Move };
                (phase, *only)
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if !self.touches.is_empty() {
                    return None;
                }
                let [only] = self.changed.as_slice() else {
                    return None;
                };
                let phase = if self.phase == TouchPhase::End { PointerPhase::Up } else { PointerPhase::Cancel };
                (phase, *only)
            }
        };
        Some(PointerEvent {
            pointer_id: contact.identifier,
            phase,
            position: Point::new(contact.client_x, contact.client_y),
            source: PointerSource::Touch,
        })
    }
}

/// Persistent editor state visible to the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected shape, if any. At most one.
    pub selected_id: Option<ShapeId>,
    /// The shape whose label is in text edit, if any.
    pub editing_id: Option<ShapeId>,
    /// Whether the shape-insertion menu is open.
    pub menu_open: bool,
    /// Background color of the whole editing surface, once one was picked.
    pub background: Option<String>,
}

/// Internal state for the gesture state machine.
///
/// Each active variant carries the pointer that owns the gesture and the
/// shape geometry at its start, so moves are computed from the start (not
/// accumulated) and a cancel can restore the shape.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a shape across the surface.
    Dragging {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// Pointer that started the drag; other pointers are ignored.
        pointer_id: PointerId,
        /// Surface-local pointer position at pointer-down.
        start: Point,
        /// Shape x at the start of the drag.
        orig_x: f64,
        /// Shape y at the start of the drag.
        orig_y: f64,
    },
    /// The user is resizing a shape by dragging one of its handles.
    Resizing {
        /// Id of the shape being resized.
        id: ShapeId,
        /// Pointer that started the resize; other pointers are ignored.
        pointer_id: PointerId,
        /// Which handle is being dragged.
        anchor: ResizeAnchor,
        /// Surface-local pointer position at pointer-down.
        start: Point,
        /// Shape x at the start of the resize.
        orig_x: f64,
        /// Shape y at the start of the resize.
        orig_y: f64,
        /// Shape width at the start of the resize.
        orig_w: f64,
        /// Shape height at the start of the resize.
        orig_h: f64,
    },
}

impl InputState {
    /// The pointer owning the active gesture, if any.
    #[must_use]
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Dragging { pointer_id, .. } | Self::Resizing { pointer_id, .. } => Some(*pointer_id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
