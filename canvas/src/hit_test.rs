use uuid::Uuid;

use super::*;
use crate::shape::{Shape, ShapeKind};

fn add_shape(store: &mut ShapeStore, x: f64, y: f64, w: f64, h: f64) -> ShapeId {
    let shape = Shape {
        id: Uuid::new_v4(),
        kind: ShapeKind::Rectangle,
        x,
        y,
        width: w,
        height: h,
        color: "#000000".to_owned(),
        label: Some("label".to_owned()),
        z_index: store.next_z(),
    };
    let id = shape.id;
    store.insert(shape);
    id
}

// =============================================================
// ResizeAnchor
// =============================================================

#[test]
fn anchor_edges() {
    assert!(ResizeAnchor::Se.has_south() && ResizeAnchor::Se.has_east());
    assert!(!ResizeAnchor::Se.has_north() && !ResizeAnchor::Se.has_west());
    assert!(ResizeAnchor::Nw.has_north() && ResizeAnchor::Nw.has_west());
    assert!(ResizeAnchor::N.has_north());
    assert!(!ResizeAnchor::N.has_east() && !ResizeAnchor::N.has_west());
    assert!(ResizeAnchor::W.has_west() && !ResizeAnchor::W.has_south());
}

#[test]
fn anchor_cursors() {
    assert_eq!(ResizeAnchor::Se.cursor(), "nwse-resize");
    assert_eq!(ResizeAnchor::Ne.cursor(), "nesw-resize");
    assert_eq!(ResizeAnchor::E.cursor(), "ew-resize");
    assert_eq!(ResizeAnchor::S.cursor(), "ns-resize");
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_surface_hits_nothing() {
    let store = ShapeStore::new();
    let hit = hit_test(Point::new(10.0, 10.0), &store, &SurfaceTransform::default(), None, None);
    assert!(hit.is_none());
}

#[test]
fn body_hit() {
    let mut store = ShapeStore::new();
    let id = add_shape(&mut store, 50.0, 50.0, 100.0, 100.0);
    let hit = hit_test(Point::new(60.0, 60.0), &store, &SurfaceTransform::default(), None, None);
    assert_eq!(hit, Some(Hit { shape_id: id, part: HitPart::Body }));
}

#[test]
fn topmost_shape_wins() {
    let mut store = ShapeStore::new();
    let _below = add_shape(&mut store, 0.0, 0.0, 100.0, 100.0);
    let above = add_shape(&mut store, 50.0, 50.0, 100.0, 100.0);
    let hit = hit_test(Point::new(75.0, 75.0), &store, &SurfaceTransform::default(), None, None);
    assert_eq!(hit.map(|h| h.shape_id), Some(above));
}

#[test]
fn handles_only_for_selected_shape() {
    let mut store = ShapeStore::new();
    let id = add_shape(&mut store, 50.0, 50.0, 100.0, 100.0);
    let corner = Point::new(152.0, 152.0);

    let unselected = hit_test(corner, &store, &SurfaceTransform::default(), None, None);
    assert!(unselected.is_none());

    let selected = hit_test(corner, &store, &SurfaceTransform::default(), Some(id), None);
    assert_eq!(selected, Some(Hit { shape_id: id, part: HitPart::ResizeHandle(ResizeAnchor::Se) }));
}

#[test]
fn handle_slop_shrinks_when_surface_is_scaled_up() {
    let mut store = ShapeStore::new();
    let id = add_shape(&mut store, 50.0, 50.0, 100.0, 100.0);
    let transform = SurfaceTransform { origin_x: 0.0, origin_y: 0.0, scale: 4.0 };
    // 6 local units = 24 client px, outside the 8px slop.
    let near = hit_test(Point::new(156.0, 156.0), &store, &transform, Some(id), None);
    assert!(near.is_none());
    let on = hit_test(Point::new(151.0, 151.0), &store, &transform, Some(id), None);
    assert_eq!(on.map(|h| h.part), Some(HitPart::ResizeHandle(ResizeAnchor::Se)));
}

#[test]
fn label_reported_only_while_editing() {
    let mut store = ShapeStore::new();
    let id = add_shape(&mut store, 0.0, 0.0, 160.0, 100.0);
    let center = Point::new(80.0, 50.0);

    let idle = hit_test(center, &store, &SurfaceTransform::default(), Some(id), None);
    assert_eq!(idle.map(|h| h.part), Some(HitPart::Body));

    let editing = hit_test(center, &store, &SurfaceTransform::default(), Some(id), Some(id));
    assert_eq!(editing.map(|h| h.part), Some(HitPart::Label));
}
