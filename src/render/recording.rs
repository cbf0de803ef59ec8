//! A renderer that keeps what it was asked to draw.
//!
//! Useful for headless hosts and tests.

use super::{Renderer, Shape};

/// Records every frame it is given.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<Vec<Shape>>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames started.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Shapes of the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[Shape]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// All recorded frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Vec<Shape>] {
        &self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.frames.push(Vec::new());
    }

    fn draw(&mut self, shape: &Shape) {
        // Shapes drawn outside a frame open one implicitly.
        if self.frames.is_empty() {
            self.frames.push(Vec::new());
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.push(shape.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::render::{render, Color, Style};

    #[test]
    fn test_records_frames() {
        let dot = Shape::Circle {
            center: Point::new(1.0, 2.0),
            radius: 3.0,
            style: Style::solid(Color::GOLD),
        };
        let mut recorder = RecordingRenderer::new();

        render(&mut recorder, &[dot.clone(), dot.clone()]);
        render(&mut recorder, &[dot.clone()]);

        assert_eq!(recorder.frame_count(), 2);
        assert_eq!(recorder.frames()[0].len(), 2);
        assert_eq!(recorder.last_frame(), Some(&[dot][..]));
    }
}
