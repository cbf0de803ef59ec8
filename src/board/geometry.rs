//! Projection from lattice space onto the drawing surface.
//!
//! Lattice coordinates put the board's corners on the unit circle with `y`
//! pointing up. The surface is a pixel grid with the origin in the top-left
//! corner and `y` pointing down; the board is scaled to leave a margin.

use serde::{Deserialize, Serialize};

/// Radius of a vertex marker, in pixels. Also the hit-test radius.
pub const VERTEX_RADIUS: f64 = 10.0;

/// Circumradius of the hexagonal backdrop, in lattice units.
pub const BACKDROP_RADIUS: f64 = 1.05;

/// A point in either lattice or pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// The pixel surface the board is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Fraction of the half-extent the unit circle maps onto.
    pub scale: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            scale: 0.9,
        }
    }
}

impl Surface {
    /// A surface of the given pixel size with the default scale.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Project a lattice point to pixels.
    ///
    /// ```
    /// use rust_patchwall::board::{Point, Surface};
    ///
    /// let surface = Surface::default();
    /// assert_eq!(surface.to_pixels(Point::new(0.0, 0.0)), Point::new(300.0, 300.0));
    /// ```
    #[must_use]
    pub fn to_pixels(&self, lattice: Point) -> Point {
        Point::new(
            (self.scale * lattice.x + 1.0) * self.width / 2.0,
            (-self.scale * lattice.y + 1.0) * self.height / 2.0,
        )
    }

    /// Corners of the hexagonal backdrop in pixels, counter-clockwise from
    /// the rightmost corner.
    #[must_use]
    pub fn backdrop(&self) -> [Point; 6] {
        std::array::from_fn(|i| {
            let theta = i as f64 * std::f64::consts::PI / 3.0;
            self.to_pixels(Point::new(
                BACKDROP_RADIUS * theta.cos(),
                BACKDROP_RADIUS * theta.sin(),
            ))
        })
    }
}

/// Does `point` fall on a vertex marker drawn at `center`?
#[must_use]
pub fn hits_marker(center: Point, point: Point) -> bool {
    center.distance_sq(point) <= VERTEX_RADIUS * VERTEX_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance_sq(b) < 1e-9
    }

    #[test]
    fn test_to_pixels_flips_y() {
        let surface = Surface::default();
        let top = surface.to_pixels(Point::new(0.0, 1.0));
        let bottom = surface.to_pixels(Point::new(0.0, -1.0));

        assert!(close(top, Point::new(300.0, 30.0)));
        assert!(close(bottom, Point::new(300.0, 570.0)));
    }

    #[test]
    fn test_to_pixels_non_square() {
        let surface = Surface::new(800.0, 400.0);
        let p = surface.to_pixels(Point::new(-1.0, 0.0));
        assert!(close(p, Point::new(40.0, 200.0)));
    }

    #[test]
    fn test_backdrop_corners() {
        let surface = Surface::default();
        let corners = surface.backdrop();

        assert!(close(corners[0], Point::new(300.0 + 0.9 * 1.05 * 300.0, 300.0)));
        assert!(close(corners[3], Point::new(300.0 - 0.9 * 1.05 * 300.0, 300.0)));
        // Second corner is above the centre line (pixel y smaller).
        assert!(corners[1].y < 300.0);
    }

    #[test]
    fn test_hit_radius_inclusive() {
        let center = Point::new(100.0, 100.0);

        assert!(hits_marker(center, Point::new(100.0, 100.0)));
        assert!(hits_marker(center, Point::new(110.0, 100.0)));
        assert!(hits_marker(center, Point::new(106.0, 108.0)));
        assert!(!hits_marker(center, Point::new(110.5, 100.0)));
        assert!(!hits_marker(center, Point::new(108.0, 108.0)));
    }

    #[test]
    fn test_offset_from() {
        let device = Point::new(250.0, 180.0);
        let origin = Point::new(50.0, 30.0);
        assert_eq!(device.offset_from(origin), Point::new(200.0, 150.0));
    }
}
