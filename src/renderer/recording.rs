//! Surface that records draw calls instead of drawing

use glam::Vec2;

use super::{Color, Surface};

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { origin: Vec2, size: Vec2 },
    FillCircle { center: Vec2, radius: f32, color: Color },
    FillRect { origin: Vec2, size: Vec2, color: Color },
}

/// Records every draw call since the last clear
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Total frames cleared so far
    pub frames: u64,
}

impl RecordingSurface {
    /// Last ball drawn this frame, if any
    pub fn last_circle(&self) -> Option<(Vec2, f32)> {
        self.commands.iter().rev().find_map(|c| match *c {
            DrawCommand::FillCircle { center, radius, .. } => Some((center, radius)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, origin: Vec2, size: Vec2) {
        // Keep memory bounded across long headless runs
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { origin, size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }
}
