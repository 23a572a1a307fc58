//! Draw list for hosts that paint the editing surface themselves.
//!
//! The editor does not draw. [`scene`] flattens its state into plain view
//! records (outline polygon, colors, label, handles) in draw order, so a
//! DOM, canvas, or terminal host can paint without knowing editor rules
//! such as "only the selected shape shows handles".

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::engine::EditorCore;
use crate::hit::ResizeAnchor;
use crate::shape::{ShapeId, ShapeKind};
use crate::surface::Point;

/// One shape ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeView {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub outline: Vec<Point>,
    pub color: String,
    pub label: Option<String>,
    pub selected: bool,
    /// Label is an editable field rather than static text.
    pub editing: bool,
    /// Handle positions; empty unless the shape is selected.
    pub handles: Vec<(ResizeAnchor, Point)>,
}

/// The whole surface ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Option<String>,
    pub shapes: Vec<ShapeView>,
    pub menu_open: bool,
}

/// Flatten the editor state into a draw list, bottom-most shape first.
#[must_use]
pub fn scene(core: &EditorCore) -> Scene {
    let selected = core.selection();
    let editing = core.editing();
    let shapes = core
        .shapes
        .sorted_shapes()
        .into_iter()
        .map(|shape| {
            let is_selected = selected == Some(shape.id);
            let handles = if is_selected {
                ResizeAnchor::ALL
                    .iter()
                    .map(|&anchor| (anchor, shape.handle_point(anchor)))
                    .collect()
            } else {
                Vec::new()
            };
            ShapeView {
                id: shape.id,
                kind: shape.kind,
                outline: shape.outline(),
                color: shape.color.clone(),
                label: shape.label.clone(),
                selected: is_selected,
                editing: editing == Some(shape.id),
                handles,
            }
        })
        .collect();

    Scene { background: core.ui.background.clone(), shapes, menu_open: core.ui.menu_open }
}
