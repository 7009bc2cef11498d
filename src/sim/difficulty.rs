//! Difficulty scaling
//!
//! Checked on every paddle hit. When the new score is a positive multiple of
//! the speed-up interval the speed factor grows and both velocity components
//! are rewritten to the same positive magnitude. The previous direction is
//! not kept, so a speed-up always sends the ball down-right.

use glam::Vec2;
use log::debug;

use super::state::GameState;

/// Does this score trigger a speed-up?
pub fn should_speed_up(score: u32, every: u32) -> bool {
    every > 0 && score > 0 && score % every == 0
}

/// Velocity for a given speed factor (same magnitude on both axes)
pub fn scaled_velocity(base_speed: f32, speed_factor: f32) -> Vec2 {
    Vec2::splat(base_speed * speed_factor)
}

/// Apply difficulty scaling after a paddle hit.
///
/// Returns the new speed factor when a speed-up happened.
pub fn on_paddle_hit(state: &mut GameState) -> Option<f32> {
    if !should_speed_up(state.score, state.settings.speed_up_every) {
        return None;
    }

    state.speed_factor += state.settings.speed_increment;
    state.ball.vel = scaled_velocity(state.settings.base_speed, state.speed_factor);
    debug!(
        "Speed up at score {}: factor {:.2}",
        state.score, state.speed_factor
    );
    Some(state.speed_factor)
}
