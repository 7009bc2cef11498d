//! Scene drawing

use super::{Surface, colors};
use crate::sim::GameState;

/// Draw one frame: clear the play area, then paddle, then ball
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear(glam::Vec2::ZERO, state.area.size());

    let paddle = state.paddle.rect();
    surface.fill_rect(paddle.origin, paddle.size, colors::PADDLE);

    let ball = &state.ball;
    surface.fill_circle(ball.pos, ball.radius, colors::BALL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use glam::Vec2;

    #[test]
    fn test_draw_frame_order() {
        let state = GameState::new(&Settings::default());
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Clear {
                    origin: Vec2::ZERO,
                    size: Vec2::new(400.0, 400.0),
                },
                DrawCommand::FillRect {
                    origin: Vec2::new(160.0, 380.0),
                    size: Vec2::new(80.0, 10.0),
                    color: colors::PADDLE,
                },
                DrawCommand::FillCircle {
                    center: Vec2::new(200.0, 200.0),
                    radius: 10.0,
                    color: colors::BALL,
                },
            ]
        );
    }
}
