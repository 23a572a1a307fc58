#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A point in either client or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of the editing surface inside the host's client area.
///
/// `origin_x` / `origin_y` are the client-space coordinates of the surface's
/// top-left corner. `scale` is the ratio of rendered size to layout size
/// (1.0 = not scaled). Shape geometry is always stored in surface-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, scale: 1.0 }
    }
}

impl SurfaceTransform {
    /// Convert a client-space point to surface-local coordinates.
    #[must_use]
    pub fn client_to_local(&self, client: Point) -> Point {
        Point {
            x: (client.x - self.origin_x) / self.scale,
            y: (client.y - self.origin_y) / self.scale,
        }
    }

    /// Convert a surface-local point to client coordinates.
    #[must_use]
    pub fn local_to_client(&self, local: Point) -> Point {
        Point {
            x: local.x * self.scale + self.origin_x,
            y: local.y * self.scale + self.origin_y,
        }
    }

    /// Convert a client-space distance to a surface-local distance.
    #[must_use]
    pub fn client_dist_to_local(&self, client_dist: f64) -> f64 {
        client_dist / self.scale
    }
}
