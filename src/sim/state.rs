//! Session state and core simulation types
//!
//! One `GameState` owns the ball, the paddle and the score for a session.
//! Collision detection reads the paddle but only ever mutates the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contacts, Rect, detect_contacts};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Ball was lost; only a reset leaves this phase
    Stopped,
}

/// Fixed-size rectangular region, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at `pos` moving down-right at `speed` on both axes
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::splat(speed),
            radius,
        }
    }

    /// Move one frame and reflect off whatever was hit.
    ///
    /// Side walls flip `vel.x`; the ceiling and the paddle each flip `vel.y`
    /// (both together cancel out). The floor does not reflect.
    pub fn advance(&mut self, area: &PlayArea, paddle: &Rect) -> Contacts {
        self.pos += self.vel;

        let contacts = detect_contacts(self.pos, self.radius, area, paddle);
        if contacts.side_wall {
            self.vel.x = -self.vel.x;
        }
        if contacts.ceiling {
            self.vel.y = -self.vel.y;
        }
        if contacts.paddle {
            self.vel.y = -self.vel.y;
        }
        contacts
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; `y` never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Displacement per key press
    pub step: f32,
}

impl Paddle {
    /// Paddle centered horizontally with its top edge `bottom_offset` above the floor
    pub fn new(area: &PlayArea, size: Vec2, bottom_offset: f32, step: f32) -> Self {
        Self {
            pos: Vec2::new((area.width - size.x) / 2.0, area.height - bottom_offset),
            size,
            step,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Shift horizontally, then clamp into the play area
    pub fn move_by(&mut self, delta: f32, area_width: f32) {
        self.set_x(self.pos.x + delta, area_width);
    }

    /// Center the paddle on `x`, then clamp into the play area
    pub fn move_to(&mut self, x: f32, area_width: f32) {
        self.set_x(x - self.size.x / 2.0, area_width);
    }

    /// Room left of the paddle for a key step
    pub fn can_step_left(&self) -> bool {
        self.pos.x > 0.0
    }

    /// Room right of the paddle for a key step
    pub fn can_step_right(&self, area_width: f32) -> bool {
        self.pos.x + self.size.x < area_width
    }

    fn set_x(&mut self, x: f32, area_width: f32) {
        // NaN input leaves the paddle where it is
        if x.is_nan() {
            return;
        }
        let max_x = (area_width - self.size.x).max(0.0);
        self.pos.x = x.clamp(0.0, max_x);
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub area: PlayArea,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Successful paddle deflections this session
    pub score: u32,
    /// Multiplier on the base ball speed, starts at 1
    pub speed_factor: f32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let area = PlayArea::new(settings.play_width, settings.play_height);
        let paddle = Paddle::new(
            &area,
            Vec2::new(settings.paddle_width, settings.paddle_height),
            settings.paddle_bottom_offset,
            settings.paddle_step,
        );
        Self {
            settings: settings.clone(),
            area,
            ball: Self::initial_ball(settings, &area),
            paddle,
            score: 0,
            speed_factor: 1.0,
            phase: GamePhase::Running,
        }
    }

    fn initial_ball(settings: &Settings, area: &PlayArea) -> Ball {
        Ball::new(area.center(), settings.ball_radius, settings.base_speed)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Stopped
    }

    /// Start a fresh session: ball, score, speed and phase are restored.
    /// The paddle keeps its current position.
    pub fn reset(&mut self) {
        self.ball = Self::initial_ball(&self.settings, &self.area);
        self.score = 0;
        self.speed_factor = 1.0;
        self.phase = GamePhase::Running;
    }
}
