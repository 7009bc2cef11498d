//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One call to `tick` advances exactly one frame
//! - Velocities are per-frame displacements
//! - No randomness

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{Contacts, Rect, detect_contacts};
pub use difficulty::{on_paddle_hit, scaled_velocity, should_speed_up};
pub use state::{Ball, GamePhase, GameState, Paddle, PlayArea};
pub use tick::{GameEvent, tick};
