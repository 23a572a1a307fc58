//! Shared numeric constants for the canvas crate.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°), the angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Inner-to-outer radius ratio for the default 5-point star.
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Number of samples taken along the heart curve when building its outline.
pub const HEART_SAMPLES: usize = 48;

/// Number of samples taken along an ellipse when building its outline.
pub const ELLIPSE_SAMPLES: usize = 40;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a resize may produce, in surface units.
pub const MIN_SHAPE_SIZE: f64 = 50.0;

/// Surface-local x where freshly inserted shapes land.
pub const DEFAULT_SHAPE_X: f64 = 50.0;

/// Surface-local y where freshly inserted shapes land.
pub const DEFAULT_SHAPE_Y: f64 = 50.0;

/// Border/icon color of a freshly inserted shape.
pub const DEFAULT_SHAPE_COLOR: &str = "#1e293b";

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Height of the centered label strip, in surface units.
pub const LABEL_HEIGHT: f64 = 24.0;
