//! Hit-testing against shapes on the editing surface.
//!
//! Handles of the selected shape are tested first so a handle that overlaps
//! a neighbouring shape still wins. Shapes are then tested top-most first.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HANDLE_RADIUS_PX;
use crate::shape::{ShapeId, ShapeStore};
use crate::surface::{Point, SurfaceTransform};

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The shape body; starts a drag.
    Body,
    /// The label text field of a shape in text edit; suppresses dragging.
    Label,
    /// A resize handle of the selected shape.
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Every anchor, in clockwise order starting at north.
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    #[must_use]
    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[must_use]
    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    #[must_use]
    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[must_use]
    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// CSS cursor name shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Test which shape (if any) is under `local_pt`.
///
/// `selected_id` is the only shape whose handles are visible, and
/// `editing_id` the only shape whose label is an editable field.
#[must_use]
pub fn hit_test(
    local_pt: Point,
    shapes: &ShapeStore,
    transform: &SurfaceTransform,
    selected_id: Option<ShapeId>,
    editing_id: Option<ShapeId>,
) -> Option<Hit> {
    if let Some(id) = selected_id
        && let Some(shape) = shapes.get(&id)
    {
        let slop = transform.client_dist_to_local(HANDLE_RADIUS_PX);
        for anchor in ResizeAnchor::ALL {
            let handle = shape.handle_point(anchor);
            if (local_pt.x - handle.x).abs() <= slop && (local_pt.y - handle.y).abs() <= slop {
                return Some(Hit { shape_id: id, part: HitPart::ResizeHandle(anchor) });
            }
        }
    }

    shapes
        .sorted_shapes()
        .into_iter()
        .rev()
        .find(|shape| shape.contains(local_pt) || (editing_id == Some(shape.id) && shape.label_contains(local_pt)))
        .map(|shape| {
            let part = if editing_id == Some(shape.id) && shape.label_contains(local_pt) {
                HitPart::Label
            } else {
                HitPart::Body
            };
            Hit { shape_id: shape.id, part }
        })
}
