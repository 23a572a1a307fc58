use uuid::Uuid;

use crate::consts::{DEFAULT_SHAPE_COLOR, DEFAULT_SHAPE_X, DEFAULT_SHAPE_Y, MIN_SHAPE_SIZE};
use crate::hit::{HitPart, ResizeAnchor, hit_test};
use crate::input::{InputState, MouseEvent, PointerEvent, PointerPhase, TouchEvent, UiState};
use crate::shape::{Shape, ShapeId, ShapeKind, ShapeStore};
use crate::surface::{Point, SurfaceTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from editor operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeCreated(Shape),
    /// Geometry, color, or label of a shape changed; carries the new state.
    ShapeUpdated(Shape),
    ShapeDeleted { id: ShapeId },
    SelectionChanged(Option<ShapeId>),
    MenuClosed,
    TextEditStarted { id: ShapeId, text: String },
    TextEditEnded { id: ShapeId },
    BackgroundChanged(String),
    SetCursor(&'static str),
    RenderNeeded,
}

/// Shape editor state: the shapes on one surface, the single selection, and
/// the active gesture.
///
/// Holds no reference to any UI toolkit. Hosts feed it pointer events and
/// menu picks, and apply the returned [`Action`]s to their view.
#[derive(Default)]
pub struct EditorCore {
    pub shapes: ShapeStore,
    pub transform: SurfaceTransform,
    pub ui: UiState,
    pub input: InputState,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the surface from shapes saved with a note.
    pub fn load_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes.load(shapes);
        self.reset_interaction();
    }

    /// Remove every shape and forget the background color.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.ui.background = None;
        self.reset_interaction();
    }

    /// Restore a previously chosen surface background.
    pub fn set_background(&mut self, color: Option<String>) {
        self.ui.background = color;
    }

    /// Update where the surface sits in the host's client area.
    pub fn set_transform(&mut self, transform: SurfaceTransform) {
        self.transform = transform;
    }

    fn reset_interaction(&mut self) {
        self.ui.selected_id = None;
        self.ui.editing_id = None;
        self.ui.menu_open = false;
        self.input = InputState::Idle;
    }

    // --- Menu / creation ---

    pub fn open_menu(&mut self) {
        self.ui.menu_open = true;
    }

    /// Insert a new shape at the default position, select it, and close the menu.
    pub fn create_shape(&mut self, kind: ShapeKind) -> Vec<Action> {
        let (width, height) = kind.default_size();
        let shape = Shape {
            id: Uuid::new_v4(),
            kind,
            x: DEFAULT_SHAPE_X,
            y: DEFAULT_SHAPE_Y,
            width,
            height,
            color: DEFAULT_SHAPE_COLOR.to_owned(),
            label: None,
            z_index: self.shapes.next_z(),
        };
        let id = shape.id;
        self.shapes.insert(shape.clone());

        let mut actions = vec![Action::ShapeCreated(shape)];
        actions.extend(self.select(id));
        self.ui.menu_open = false;
        actions.push(Action::MenuClosed);
        actions
    }

    /// Delete a shape, clearing selection and text edit if they pointed at it.
    pub fn remove_shape(&mut self, id: &ShapeId) -> Vec<Action> {
        if self.shapes.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::ShapeDeleted { id: *id }];
        if self.input_targets(*id) {
            self.input = InputState::Idle;
        }
        if self.ui.editing_id == Some(*id) {
            self.ui.editing_id = None;
        }
        if self.ui.selected_id == Some(*id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Selection ---

    /// Make `id` the sole selected shape.
    pub fn select(&mut self, id: ShapeId) -> Vec<Action> {
        if self.shapes.get(&id).is_none() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.ui.editing_id.is_some_and(|editing| editing != id) {
            actions.extend(self.end_text_edit());
        }
        if self.ui.selected_id != Some(id) {
            self.ui.selected_id = Some(id);
            actions.push(Action::SelectionChanged(Some(id)));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Clear the selection, as when the background is clicked.
    pub fn deselect_all(&mut self) -> Vec<Action> {
        let mut actions = self.end_text_edit();
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Text edit ---

    /// Double-activation: make the shape's label directly editable.
    pub fn begin_text_edit(&mut self, id: ShapeId) -> Vec<Action> {
        let Some(text) = self.shapes.get(&id).map(|s| s.label.clone().unwrap_or_default()) else {
            return Vec::new();
        };
        let mut actions = self.select(id);
        self.ui.editing_id = Some(id);
        actions.push(Action::TextEditStarted { id, text });
        actions
    }

    /// Commit label text typed by the host.
    pub fn set_label(&mut self, id: &ShapeId, text: &str) -> Vec<Action> {
        let Some(shape) = self.shapes.get_mut(id) else {
            return Vec::new();
        };
        shape.label = if text.is_empty() { None } else { Some(text.to_owned()) };
        vec![Action::ShapeUpdated(shape.clone()), Action::RenderNeeded]
    }

    /// Focus left the label; leave the text edit sub-mode.
    pub fn end_text_edit(&mut self) -> Vec<Action> {
        match self.ui.editing_id.take() {
            Some(id) => vec![Action::TextEditEnded { id }],
            None => Vec::new(),
        }
    }

    // --- Color ---

    /// Apply a palette color to the selected shape, or to the surface background
    /// when nothing is selected.
    pub fn apply_color(&mut self, color: &str) -> Vec<Action> {
        if let Some(id) = self.ui.selected_id
            && let Some(shape) = self.shapes.get_mut(&id)
        {
            shape.color = color.to_owned();
            return vec![Action::ShapeUpdated(shape.clone()), Action::RenderNeeded];
        }
        self.ui.background = Some(color.to_owned());
        vec![Action::BackgroundChanged(color.to_owned()), Action::RenderNeeded]
    }

    // --- Input events ---

    /// Feed a raw mouse event through the pointer adapter.
    pub fn on_mouse(&mut self, event: MouseEvent) -> Vec<Action> {
        self.on_pointer(event.to_pointer())
    }

    /// Feed a raw touch event through the pointer adapter. Multi-touch is ignored.
    pub fn on_touch(&mut self, event: &TouchEvent) -> Vec<Action> {
        match event.to_pointer() {
            Some(pointer) => self.on_pointer(pointer),
            None => Vec::new(),
        }
    }

    /// Drive the gesture state machine with one unified pointer event.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<Action> {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event),
            PointerPhase::Move => self.pointer_move(event),
            PointerPhase::Up => self.pointer_up(event),
            PointerPhase::Cancel => {
                if self.input.pointer_id() == Some(event.pointer_id) {
                    self.cancel_gesture()
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// The host window or tab lost focus.
    pub fn on_blur(&mut self) -> Vec<Action> {
        self.cancel_gesture()
    }

    fn pointer_down(&mut self, event: PointerEvent) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let local = self.transform.client_to_local(event.position);
        let hit = hit_test(local, &self.shapes, &self.transform, self.ui.selected_id, self.ui.editing_id);
        let Some(hit) = hit else {
            return self.deselect_all();
        };
        let Some(shape) = self.shapes.get(&hit.shape_id) else {
            return Vec::new();
        };
        let (orig_x, orig_y, orig_w, orig_h) = (shape.x, shape.y, shape.width, shape.height);

        match hit.part {
            HitPart::Label => Vec::new(),
            HitPart::ResizeHandle(anchor) => {
                self.input = InputState::Resizing {
                    id: hit.shape_id,
                    pointer_id: event.pointer_id,
                    anchor,
                    start: local,
                    orig_x,
                    orig_y,
                    orig_w,
                    orig_h,
                };
                vec![Action::SetCursor(anchor.cursor())]
            }
            HitPart::Body => {
                let mut actions = self.select(hit.shape_id);
                self.input = InputState::Dragging {
                    id: hit.shape_id,
                    pointer_id: event.pointer_id,
                    start: local,
                    orig_x,
                    orig_y,
                };
                actions.push(Action::SetCursor("grabbing"));
                actions
            }
        }
    }

    fn pointer_move(&mut self, event: PointerEvent) -> Vec<Action> {
        if self.input.pointer_id() != Some(event.pointer_id) {
            return Vec::new();
        }
        let local = self.transform.client_to_local(event.position);
        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, start, orig_x, orig_y, .. } => {
                let Some(shape) = self.shapes.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                shape.x = orig_x + (local.x - start.x);
                shape.y = orig_y + (local.y - start.y);
                vec![Action::ShapeUpdated(shape.clone()), Action::RenderNeeded]
            }
            InputState::Resizing { id, anchor, start, orig_x, orig_y, orig_w, orig_h, .. } => {
                let Some(shape) = self.shapes.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                let (x, y, w, h) = resized_bounds(
                    anchor,
                    (orig_x, orig_y, orig_w, orig_h),
                    Point::new(local.x - start.x, local.y - start.y),
                );
                shape.x = x;
                shape.y = y;
                shape.width = w;
                shape.height = h;
                vec![Action::ShapeUpdated(shape.clone()), Action::RenderNeeded]
            }
        }
    }

    fn pointer_up(&mut self, event: PointerEvent) -> Vec<Action> {
        if self.input.pointer_id() != Some(event.pointer_id) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("default")]
    }

    /// Abort the active gesture and put the shape back where it started.
    fn cancel_gesture(&mut self) -> Vec<Action> {
        let restore = match std::mem::take(&mut self.input) {
            InputState::Idle => return Vec::new(),
            InputState::Dragging { id, orig_x, orig_y, .. } => self.shapes.get_mut(&id).map(|shape| {
                shape.x = orig_x;
                shape.y = orig_y;
                shape.clone()
            }),
            InputState::Resizing { id, orig_x, orig_y, orig_w, orig_h, .. } => {
                self.shapes.get_mut(&id).map(|shape| {
                    shape.x = orig_x;
                    shape.y = orig_y;
                    shape.width = orig_w;
                    shape.height = orig_h;
                    shape.clone()
                })
            }
        };
        let mut actions = Vec::new();
        if let Some(shape) = restore {
            actions.push(Action::ShapeUpdated(shape));
            actions.push(Action::RenderNeeded);
        }
        actions.push(Action::SetCursor("default"));
        actions
    }

    fn input_targets(&self, target: ShapeId) -> bool {
        match &self.input {
            InputState::Idle => false,
            InputState::Dragging { id, .. } | InputState::Resizing { id, .. } => *id == target,
        }
    }

    // --- Queries ---

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    /// The shape whose label is being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<ShapeId> {
        self.ui.editing_id
    }

    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.ui.background.as_deref()
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Owned copies of every shape in draw order, for saving with a note.
    #[must_use]
    pub fn export_shapes(&self) -> Vec<Shape> {
        self.shapes.sorted_shapes().into_iter().cloned().collect()
    }
}

/// New `(x, y, width, height)` after dragging `anchor` by `delta`.
///
/// East/south edges grow with a positive delta, west/north edges with a
/// negative one; the edge opposite the anchor stays fixed. Each dimension is
/// clamped to [`MIN_SHAPE_SIZE`].
#[must_use]
pub fn resized_bounds(anchor: ResizeAnchor, orig: (f64, f64, f64, f64), delta: Point) -> (f64, f64, f64, f64) {
    let (orig_x, orig_y, orig_w, orig_h) = orig;
    let (mut x, mut y, mut w, mut h) = orig;

    if anchor.has_east() {
        w = (orig_w + delta.x).max(MIN_SHAPE_SIZE);
    } else if anchor.has_west() {
        w = (orig_w - delta.x).max(MIN_SHAPE_SIZE);
        x = orig_x + (orig_w - w);
    }
    if anchor.has_south() {
        h = (orig_h + delta.y).max(MIN_SHAPE_SIZE);
    } else if anchor.has_north() {
        h = (orig_h - delta.y).max(MIN_SHAPE_SIZE);
        y = orig_y + (orig_h - h);
    }
    (x, y, w, h)
}
