//! Drawing descriptions for a pluggable backend.
//!
//! The engine never touches pixels. [`compose_scene`] turns the board and the
//! current state into an ordered list of [`Shape`]s; a [`Renderer`] paints
//! them in order, fill first and then stroke.
//!
//! ## Layering
//!
//! 1. Hexagonal backdrop
//! 2. Captured faces, in the owner's color
//! 3. Built walls
//! 4. Vertex markers, colored by status

pub mod recording;
pub mod scene;
pub mod style;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Point;

pub use recording::RecordingRenderer;
pub use scene::{compose_scene, WALL_WIDTH};
pub use style::{Color, Style};

/// A filled and stroked shape in board-local pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A circle.
    Circle {
        center: Point,
        radius: f64,
        style: Style,
    },
    /// A closed polygon through `points`, in order.
    Polygon {
        points: SmallVec<[Point; 6]>,
        style: Style,
    },
}

impl Shape {
    /// Paint style of the shape.
    #[must_use]
    pub fn style(&self) -> Style {
        match self {
            Shape::Circle { style, .. } | Shape::Polygon { style, .. } => *style,
        }
    }
}

/// A drawing backend.
pub trait Renderer {
    /// Called once before the shapes of a frame. Does nothing by default.
    fn begin_frame(&mut self) {}

    /// Paint one shape.
    fn draw(&mut self, shape: &Shape);
}

/// Paint a full frame.
pub fn render<R: Renderer + ?Sized>(renderer: &mut R, shapes: &[Shape]) {
    renderer.begin_frame();
    for shape in shapes {
        renderer.draw(shape);
    }
}
