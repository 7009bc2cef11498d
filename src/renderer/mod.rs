//! 2D rendering module
//!
//! The game draws through the [`Surface`] trait: a clear plus two fill
//! primitives. Hosts supply the real surface (a canvas 2D context in the
//! browser); tests and the headless demo use [`RecordingSurface`].

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_frame;

use glam::Vec2;

/// A 2D drawing capability
pub trait Surface {
    /// Clear a rectangle to transparent
    fn clear(&mut self, origin: Vec2, size: Vec2);
    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
}

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Color from a packed `0xRRGGBB` value
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// CSS `#rrggbb` string
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = Color::hex(0x3498db);
    pub const PADDLE: Color = Color::hex(0x2ecc71);
}
