//! Shape model: annotation kinds, their geometry, and the in-memory store.
//!
//! This module defines what lives on the editing surface (`Shape`,
//! `ShapeKind`), the outline geometry hosts use to draw each kind, and the
//! runtime store that owns every live shape (`ShapeStore`).
//!
//! Shapes are never persisted one by one. The host serializes the whole
//! store into a note attachment when the note is saved, and hydrates it
//! again with [`ShapeStore::load`] when the note is reopened.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{ELLIPSE_SAMPLES, FRAC_PI_5, HEART_SAMPLES, LABEL_HEIGHT, STAR_INNER_RATIO};
use crate::hit::ResizeAnchor;
use crate::surface::Point;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Direction an arrow shape points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// The kind of an annotation shape.
///
/// Serialized as its menu tag (`"square"`, `"arrow-left"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
    Ellipse,
    Arrow(ArrowDirection),
    Star,
    Heart,
}

/// Error returned when a menu tag does not name a shape kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape kind: {0}")]
pub struct UnknownShapeKind(pub String);

impl ShapeKind {
    /// Every kind in insertion-menu order.
    pub const ALL: [Self; 10] = [
        Self::Square,
        Self::Rectangle,
        Self::Circle,
        Self::Ellipse,
        Self::Arrow(ArrowDirection::Up),
        Self::Arrow(ArrowDirection::Down),
        Self::Arrow(ArrowDirection::Left),
        Self::Arrow(ArrowDirection::Right),
        Self::Star,
        Self::Heart,
    ];

    /// Default `(width, height)` used when the shape is inserted from the menu.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Square | Self::Circle | Self::Star | Self::Heart => (100.0, 100.0),
            Self::Rectangle | Self::Ellipse => (160.0, 100.0),
            Self::Arrow(dir) if dir.is_vertical() => (60.0, 120.0),
            Self::Arrow(_) => (120.0, 60.0),
        }
    }

    /// Whether the body is elliptical rather than box-shaped for hit-testing.
    #[must_use]
    pub fn is_round(self) -> bool {
        matches!(self, Self::Circle | Self::Ellipse)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => f.write_str("square"),
            Self::Rectangle => f.write_str("rectangle"),
            Self::Circle => f.write_str("circle"),
            Self::Ellipse => f.write_str("ellipse"),
            Self::Arrow(dir) => write!(f, "arrow-{}", dir.as_str()),
            Self::Star => f.write_str("star"),
            Self::Heart => f.write_str("heart"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "square" => Self::Square,
            "rectangle" => Self::Rectangle,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "arrow-up" => Self::Arrow(ArrowDirection::Up),
            "arrow-down" => Self::Arrow(ArrowDirection::Down),
            "arrow-left" => Self::Arrow(ArrowDirection::Left),
            "arrow-right" => Self::Arrow(ArrowDirection::Right),
            "star" => Self::Star,
            "heart" => Self::Heart,
            other => return Err(UnknownShapeKind(other.to_owned())),
        };
        Ok(kind)
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = UnknownShapeKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.to_string()
    }
}

/// An annotation shape as stored on the surface and inside a note attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Which figure is drawn.
    pub kind: ShapeKind,
    /// Left edge of the bounding box in surface-local units.
    pub x: f64,
    /// Top edge of the bounding box in surface-local units.
    pub y: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Border/icon color as a CSS color string.
    pub color: String,
    /// Optional free-text label drawn centered on the shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Stacking order; higher values are drawn (and hit) above lower ones.
    #[serde(default)]
    pub z_index: i64,
}

impl Shape {
    /// Whether `p` falls inside the shape's body.
    ///
    /// Circles and ellipses use the ellipse equation; every other kind is
    /// tested against its bounding box.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        if self.kind.is_round() {
            let rx = self.width / 2.0;
            let ry = self.height / 2.0;
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let dx = (p.x - (self.x + rx)) / rx;
            let dy = (p.y - (self.y + ry)) / ry;
            return dx * dx + dy * dy <= 1.0;
        }
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Whether `p` falls inside the centered label strip.
    #[must_use]
    pub fn label_contains(&self, p: Point) -> bool {
        let strip_h = LABEL_HEIGHT.min(self.height);
        let top = self.y + (self.height - strip_h) / 2.0;
        p.x >= self.x && p.x <= self.x + self.width && p.y >= top && p.y <= top + strip_h
    }

    /// Surface-local position of a resize handle.
    #[must_use]
    pub fn handle_point(&self, anchor: ResizeAnchor) -> Point {
        let fx = if anchor.has_west() {
            0.0
        } else if anchor.has_east() {
            1.0
        } else {
            0.5
        };
        let fy = if anchor.has_north() {
            0.0
        } else if anchor.has_south() {
            1.0
        } else {
            0.5
        };
        Point::new(self.x + self.width * fx, self.y + self.height * fy)
    }

    /// Closed outline polygon in surface-local coordinates.
    #[must_use]
    pub fn outline(&self) -> Vec<Point> {
        unit_outline(self.kind)
            .into_iter()
            .map(|(u, v)| Point::new(self.x + u * self.width, self.y + v * self.height))
            .collect()
    }
}

/// Outline of `kind` inside the unit square, as `(u, v)` fractions.
fn unit_outline(kind: ShapeKind) -> Vec<(f64, f64)> {
    match kind {
        ShapeKind::Square | ShapeKind::Rectangle => vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        ShapeKind::Circle | ShapeKind::Ellipse => ellipse_outline(),
        ShapeKind::Star => star_outline(),
        ShapeKind::Heart => heart_outline(),
        ShapeKind::Arrow(dir) => arrow_outline(dir),
    }
}

#[allow(clippy::cast_precision_loss)]
fn ellipse_outline() -> Vec<(f64, f64)> {
    (0..ELLIPSE_SAMPLES)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / ELLIPSE_SAMPLES as f64;
            (0.5 + 0.5 * t.cos(), 0.5 + 0.5 * t.sin())
        })
        .collect()
}

fn star_outline() -> Vec<(f64, f64)> {
    (0..10)
        .map(|i| {
            let angle = -std::f64::consts::FRAC_PI_2 + FRAC_PI_5 * f64::from(i);
            let r = if i % 2 == 0 { 0.5 } else { 0.5 * STAR_INNER_RATIO };
            (0.5 + r * angle.cos(), 0.5 + r * angle.sin())
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn heart_outline() -> Vec<(f64, f64)> {
    let raw: Vec<(f64, f64)> = (0..HEART_SAMPLES)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / HEART_SAMPLES as f64;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            (x, -y)
        })
        .collect();
    normalize_to_unit(&raw)
}

fn arrow_outline(dir: ArrowDirection) -> Vec<(f64, f64)> {
    // Right-pointing arrow; other directions are reflections of it.
    const RIGHT: [(f64, f64); 7] = [
        (0.0, 0.3),
        (0.6, 0.3),
        (0.6, 0.0),
        (1.0, 0.5),
        (0.6, 1.0),
        (0.6, 0.7),
        (0.0, 0.7),
    ];
    RIGHT
        .iter()
        .map(|&(u, v)| match dir {
            ArrowDirection::Right => (u, v),
            ArrowDirection::Left => (1.0 - u, v),
            ArrowDirection::Down => (v, u),
            ArrowDirection::Up => (v, 1.0 - u),
        })
        .collect()
}

fn normalize_to_unit(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);
    points
        .iter()
        .map(|&(x, y)| ((x - min_x) / span_x, (y - min_y) / span_y))
        .collect()
}

/// In-memory store of the shapes on one editing surface.
pub struct ShapeStore {
    shapes: HashMap<ShapeId, Shape>,
    next_z: i64,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: HashMap::new(), next_z: 0 }
    }

    /// Insert or replace a shape, keeping the z counter above every stored shape.
    pub fn insert(&mut self, shape: Shape) {
        self.next_z = self.next_z.max(shape.z_index + 1);
        self.shapes.insert(shape.id, shape);
    }

    /// The z-index the next inserted shape should use to land on top.
    #[must_use]
    pub fn next_z(&self) -> i64 {
        self.next_z
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// Replace all shapes, e.g. when a saved note is reopened.
    pub fn load(&mut self, shapes: Vec<Shape>) {
        self.clear();
        for shape in shapes {
            self.insert(shape);
        }
    }

    /// Drop every shape and reset the z counter.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.next_z = 0;
    }

    /// All shapes sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
