//! Colors and paint styles.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    // Seats.
    pub const FOREST_GREEN: Color = Color::rgb(34, 139, 34);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const GOLD: Color = Color::rgb(255, 215, 0);

    // Vertex markers.
    pub const YELLOW_GREEN: Color = Color::rgb(154, 205, 50);
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const LAVENDER: Color = Color::rgb(230, 230, 250);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    // Walls.
    pub const AZURE: Color = Color::rgb(240, 255, 255);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style `#rrggbb` form.
    ///
    /// ```
    /// use rust_patchwall::render::Color;
    ///
    /// assert_eq!(Color::TOMATO.to_hex(), "#ff6347");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// How a shape is painted: fill first, then stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub stroke: Color,
    pub fill: Color,
}

impl Style {
    /// Create a style.
    #[must_use]
    pub const fn new(stroke: Color, fill: Color) -> Self {
        Self { stroke, fill }
    }

    /// Stroke and fill in the same color.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self::new(color, color)
    }
}
