//! Bounce Ball - A single-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball motion, collisions, difficulty)
//! - `input`: Generic input events and the paddle input handler
//! - `renderer`: 2D drawing surface abstraction and scene drawing
//! - `platform`: Host capabilities (frame scheduling, score display, notices)
//! - `game`: The frame loop state machine
//! - `settings`: Data-driven game tuning

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{GameLoop, LoopControl};
pub use input::{InputEvent, InputResponse};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 400.0;
    pub const PLAY_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-frame displacement on each axis at speed factor 1
    pub const BALL_BASE_SPEED: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the bottom of the play area to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 20.0;
    /// Displacement per arrow key press
    pub const PADDLE_STEP: f32 = 5.0;

    /// Difficulty scaling
    pub const SPEED_INCREMENT: f32 = 0.1;
    /// Speed up whenever the score is a multiple of this
    pub const SPEED_UP_EVERY: u32 = 5;
}
