//! Per-frame simulation step
//!
//! Velocities are in per-frame units; there is no fixed wall-clock timestep.

use log::{debug, info};

use super::difficulty;
use super::state::{GamePhase, GameState};

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball reflected off the left or right wall
    WallBounce,
    /// Ball reflected off the top wall
    CeilingBounce,
    /// Ball deflected by the paddle; carries the new score
    PaddleHit { score: u32 },
    /// Ball speed increased; carries the new speed factor
    SpeedUp { factor: f32 },
    /// Ball passed the bottom of the play area
    GameOver { score: u32 },
}

/// Advance the session by one frame.
///
/// Does nothing once the session is stopped. The paddle check runs before
/// the floor check, so a single frame can both score and end the session.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    let paddle = state.paddle.rect();
    let contacts = state.ball.advance(&state.area, &paddle);

    if contacts.side_wall {
        events.push(GameEvent::WallBounce);
    }
    if contacts.ceiling {
        events.push(GameEvent::CeilingBounce);
    }

    if contacts.paddle {
        state.score += 1;
        debug!("Paddle hit, score {}", state.score);
        events.push(GameEvent::PaddleHit { score: state.score });
        if let Some(factor) = difficulty::on_paddle_hit(state) {
            events.push(GameEvent::SpeedUp { factor });
        }
    }

    if contacts.floor {
        state.phase = GamePhase::Stopped;
        info!("Ball lost, final score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
