//! Collision tests for an axis-aligned play area
//!
//! Every test looks at the ball's circular extent after it has moved. There is
//! no position correction: a ball that overshoots a wall keeps its position
//! for that frame and only its velocity is reflected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PlayArea;

/// Axis-aligned rectangle (origin at top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// True if `x` lies strictly between the left and right edges
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }
}

/// Everything a ball touched on one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Crossed the left or right wall
    pub side_wall: bool,
    /// Crossed the top wall
    pub ceiling: bool,
    /// Overlaps the paddle's top edge inside its horizontal span
    pub paddle: bool,
    /// Crossed the bottom of the play area
    pub floor: bool,
}

pub fn crosses_side_wall(pos: Vec2, radius: f32, area: &PlayArea) -> bool {
    pos.x + radius > area.width || pos.x - radius < 0.0
}

pub fn crosses_ceiling(pos: Vec2, radius: f32) -> bool {
    pos.y - radius < 0.0
}

/// Paddle contact ignores the paddle's bottom edge, so a ball lingering below
/// the top edge keeps reporting contact on later frames.
pub fn touches_paddle(pos: Vec2, radius: f32, paddle: &Rect) -> bool {
    pos.y + radius > paddle.top() && paddle.spans_x(pos.x)
}

pub fn crosses_floor(pos: Vec2, radius: f32, area: &PlayArea) -> bool {
    pos.y + radius > area.height
}

/// Run every contact test for a ball at `pos`
pub fn detect_contacts(pos: Vec2, radius: f32, area: &PlayArea, paddle: &Rect) -> Contacts {
    Contacts {
        side_wall: crosses_side_wall(pos, radius, area),
        ceiling: crosses_ceiling(pos, radius),
        paddle: touches_paddle(pos, radius, paddle),
        floor: crosses_floor(pos, radius, area),
    }
}
