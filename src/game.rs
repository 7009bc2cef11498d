//! Frame loop
//!
//! `GameLoop` owns the session and the host frontend. Each frame it clears
//! and redraws the scene, advances the simulation one step and forwards score
//! changes and the end-of-session notice to the host. The loop reschedules
//! itself through a [`FrameScheduler`] until the ball is lost; a reset
//! resumes it.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::input::{self, InputEvent, InputResponse};
use crate::platform::{FrameScheduler, ScoreDisplay, SessionNotifier};
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Everything the loop needs from its host besides scheduling
pub trait Frontend: Surface + ScoreDisplay + SessionNotifier {}

impl<T: Surface + ScoreDisplay + SessionNotifier> Frontend for T {}

/// Whether another frame should be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Text of the end-of-session notice
pub fn game_over_message(score: u32) -> String {
    format!("Game Over! Your score: {score}")
}

/// Game instance holding the session and its host
pub struct GameLoop<F> {
    state: GameState,
    frontend: F,
    /// A frame is queued with the scheduler
    scheduled: bool,
}

impl<F: Frontend> GameLoop<F> {
    pub fn new(settings: &Settings, frontend: F) -> Self {
        info!(
            "Session started ({}x{} play area)",
            settings.play_width, settings.play_height
        );
        Self {
            state: GameState::new(settings),
            frontend,
            scheduled: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Forward a player input to the session
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        input::handle_input(&mut self.state, event)
    }

    /// Run one frame
    pub fn frame(&mut self) -> LoopControl {
        self.scheduled = false;
        if self.state.is_over() {
            return LoopControl::Stop;
        }

        draw_frame(&mut self.frontend, &self.state);

        for event in tick(&mut self.state) {
            match event {
                GameEvent::PaddleHit { score } => self.frontend.show_score(score),
                GameEvent::GameOver { score } => {
                    self.frontend.notify(&game_over_message(score));
                }
                _ => {}
            }
        }

        if self.state.is_over() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Restart the session and redraw the score
    pub fn reset(&mut self) {
        self.state.reset();
        self.frontend.show_score(self.state.score);
        info!("Session reset");
    }
}

/// Game loop shared between the scheduler and input handlers
pub type SharedGame<F> = Rc<RefCell<GameLoop<F>>>;

pub fn shared<F: Frontend>(game: GameLoop<F>) -> SharedGame<F> {
    Rc::new(RefCell::new(game))
}

/// Schedule the next frame unless one is already queued.
///
/// Every frame that returns [`LoopControl::Continue`] schedules its successor.
pub fn start<F, S>(game: &SharedGame<F>, scheduler: &Rc<S>)
where
    F: Frontend + 'static,
    S: FrameScheduler + ?Sized + 'static,
{
    {
        let mut g = game.borrow_mut();
        if g.scheduled {
            return;
        }
        g.scheduled = true;
    }

    let next_game = Rc::clone(game);
    let next_scheduler = Rc::clone(scheduler);
    scheduler.schedule_next(Box::new(move || {
        let control = next_game.borrow_mut().frame();
        if control == LoopControl::Continue {
            start(&next_game, &next_scheduler);
        }
    }));
}

/// Reset the session and make sure frames are running again
pub fn restart<F, S>(game: &SharedGame<F>, scheduler: &Rc<S>)
where
    F: Frontend + 'static,
    S: FrameScheduler + ?Sized + 'static,
{
    game.borrow_mut().reset();
    start(game, scheduler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessHost, ManualScheduler};
    use crate::renderer::DrawCommand;
    use crate::sim::GamePhase;
    use glam::Vec2;

    fn setup() -> (SharedGame<HeadlessHost>, Rc<ManualScheduler>) {
        let game = shared(GameLoop::new(&Settings::default(), HeadlessHost::default()));
        let scheduler = Rc::new(ManualScheduler::new());
        (game, scheduler)
    }

    #[test]
    fn test_first_frame_draws_then_moves() {
        let (game, scheduler) = setup();
        start(&game, &scheduler);
        assert!(scheduler.step());

        let g = game.borrow();
        // Drawn at the pre-update position
        assert_eq!(
            g.frontend().surface.last_circle(),
            Some((Vec2::new(200.0, 200.0), 10.0))
        );
        assert!(matches!(
            g.frontend().surface.commands[0],
            DrawCommand::Clear { .. }
        ));
        assert_eq!(g.state().ball.pos, Vec2::new(203.0, 203.0));
        assert!(g.is_scheduled());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_unattended_ball_is_lost() {
        let (game, scheduler) = setup();
        start(&game, &scheduler);

        // Diagonal from the center misses the centered paddle
        let frames = scheduler.run(1_000);
        assert_eq!(frames, 64);
        assert_eq!(scheduler.pending(), 0);

        let g = game.borrow();
        assert_eq!(g.state().phase, GamePhase::Stopped);
        assert_eq!(g.frontend().notices, vec![game_over_message(0)]);
        assert!(g.frontend().scores.is_empty());
        assert!(!g.is_scheduled());
    }

    #[test]
    fn test_ball_at_bottom_ends_session() {
        let (game, scheduler) = setup();
        {
            let mut g = game.borrow_mut();
            let state = g.state_mut();
            state.score = 3;
            state.paddle.pos.x = 0.0;
            state.ball.pos = Vec2::new(300.0, 395.0);
            state.ball.vel = Vec2::new(3.0, 3.0);
        }
        start(&game, &scheduler);
        assert_eq!(scheduler.run(10), 1);

        let g = game.borrow();
        assert!(g.state().is_over());
        assert_eq!(g.frontend().notices, vec!["Game Over! Your score: 3"]);
    }

    #[test]
    fn test_stopped_frame_does_nothing() {
        let (game, _scheduler) = setup();
        let mut g = game.borrow_mut();
        g.state_mut().phase = GamePhase::Stopped;
        assert_eq!(g.frame(), LoopControl::Stop);
        assert_eq!(g.frontend().surface.frames, 0);
    }

    #[test]
    fn test_five_paddle_hits_speed_up() {
        let (game, _scheduler) = setup();
        let mut g = game.borrow_mut();

        for expected in 1..=5 {
            {
                let state = g.state_mut();
                state.ball.pos = Vec2::new(200.0, 368.0);
                state.ball.vel.y = state.ball.vel.y.abs();
            }
            assert_eq!(g.frame(), LoopControl::Continue);
            assert_eq!(g.state().score, expected);
            if expected < 5 {
                assert_eq!(g.state().speed_factor, 1.0);
            }
        }

        let state = g.state();
        assert!((state.speed_factor - 1.1).abs() < 1e-5);
        assert!((state.ball.vel.x - 3.3).abs() < 1e-4);
        assert!((state.ball.vel.y - 3.3).abs() < 1e-4);
        assert_eq!(g.frontend().scores, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_restart_after_game_over_resumes() {
        let (game, scheduler) = setup();
        start(&game, &scheduler);
        scheduler.run(1_000);
        assert!(game.borrow().state().is_over());

        restart(&game, &scheduler);
        assert_eq!(scheduler.pending(), 1);
        {
            let g = game.borrow();
            let state = g.state();
            assert!(!state.is_over());
            assert_eq!(state.score, 0);
            assert_eq!(state.speed_factor, 1.0);
            assert_eq!(state.ball.pos, Vec2::new(200.0, 200.0));
            assert_eq!(state.ball.vel, Vec2::new(3.0, 3.0));
            assert_eq!(g.frontend().scores, vec![0]);
        }

        assert!(scheduler.step());
        assert_eq!(game.borrow().state().ball.pos, Vec2::new(203.0, 203.0));
    }

    #[test]
    fn test_restart_mid_session_keeps_single_loop() {
        let (game, scheduler) = setup();
        start(&game, &scheduler);
        scheduler.run(10);
        restart(&game, &scheduler);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_restart_keeps_paddle_position() {
        let (game, scheduler) = setup();
        game.borrow_mut().handle_input(InputEvent::PointerAt(60.0));
        restart(&game, &scheduler);
        assert_eq!(game.borrow().state().paddle.pos.x, 20.0);
    }

    #[test]
    fn test_input_between_frames_moves_paddle() {
        let (game, scheduler) = setup();
        start(&game, &scheduler);
        scheduler.step();
        let response = game.borrow_mut().handle_input(InputEvent::TouchAt(300.0));
        assert!(response.prevent_default);
        scheduler.step();

        let g = game.borrow();
        let paddle_drawn = g.frontend().surface.commands.iter().find_map(|c| match *c {
            DrawCommand::FillRect { origin, .. } => Some(origin),
            _ => None,
        });
        assert_eq!(paddle_drawn, Some(Vec2::new(260.0, 380.0)));
    }
}
