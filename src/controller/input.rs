//! Pointer input translation.

use crate::board::Point;

/// Converts raw device coordinates into board-local pixels.
pub trait InputSource {
    fn to_board(&self, device: Point) -> Point;
}

/// A drawing surface placed at a fixed device offset.
///
/// ```
/// use rust_patchwall::board::Point;
/// use rust_patchwall::controller::{InputSource, SurfaceOrigin};
///
/// let input = SurfaceOrigin(Point::new(40.0, 25.0));
/// assert_eq!(input.to_board(Point::new(340.0, 325.0)), Point::new(300.0, 300.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceOrigin(pub Point);

impl InputSource for SurfaceOrigin {
    fn to_board(&self, device: Point) -> Point {
        device.offset_from(self.0)
    }
}
