//! Player input
//!
//! Hosts translate their native keyboard, pointer and touch events into
//! [`InputEvent`]s and feed them to [`handle_input`]. Input only ever moves
//! the paddle.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Device-independent input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Left arrow key press (one paddle step)
    KeyLeft,
    /// Right arrow key press (one paddle step)
    KeyRight,
    /// Pointer at this x coordinate (play-area space)
    PointerAt(f32),
    /// Touch at this x coordinate (play-area space)
    TouchAt(f32),
}

impl InputEvent {
    /// Map a DOM-style key name to an input event
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(InputEvent::KeyLeft),
            "ArrowRight" => Some(InputEvent::KeyRight),
            _ => None,
        }
    }
}

/// What the host should do after an event was handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// Suppress the platform's default action (touch scrolling)
    pub prevent_default: bool,
}

/// Apply one input event to the session.
///
/// Key steps are only taken while there is room on that side; the step itself
/// still clamps. A stopped session ignores input until it is reset.
pub fn handle_input(state: &mut GameState, event: InputEvent) -> InputResponse {
    let prevent_default = matches!(event, InputEvent::TouchAt(_));
    if state.is_over() {
        return InputResponse { prevent_default };
    }

    let width = state.area.width;
    let paddle = &mut state.paddle;
    let step = paddle.step;
    match event {
        InputEvent::KeyLeft => {
            if paddle.can_step_left() {
                paddle.move_by(-step, width);
            }
        }
        InputEvent::KeyRight => {
            if paddle.can_step_right(width) {
                paddle.move_by(step, width);
            }
        }
        InputEvent::PointerAt(x) | InputEvent::TouchAt(x) => paddle.move_to(x, width),
    }

    InputResponse { prevent_default }
}

/// Demo player: chase the ball one key step at a time.
///
/// Being limited to key steps, it eventually falls behind once the ball
/// outruns the paddle step.
pub fn autopilot(state: &GameState) -> Option<InputEvent> {
    if state.is_over() {
        return None;
    }
    let offset = state.ball.pos.x - state.paddle.center_x();
    let dead_zone = state.paddle.step / 2.0;
    if offset < -dead_zone {
        Some(InputEvent::KeyLeft)
    } else if offset > dead_zone {
        Some(InputEvent::KeyRight)
    } else {
        None
    }
}
