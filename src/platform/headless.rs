//! Headless host
//!
//! Drives the game without a display: frames run when [`ManualScheduler::step`]
//! is called, drawing is recorded, and score updates and notices are kept for
//! inspection.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glam::Vec2;
use log::info;

use super::{FrameScheduler, ScoreDisplay, SessionNotifier};
use crate::game::{self, GameLoop};
use crate::input::autopilot;
use crate::renderer::{Color, RecordingSurface, Surface};
use crate::settings::Settings;
use crate::sim::GameState;

/// Frame scheduler stepped by hand
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting to run
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the next scheduled frame. Returns false if nothing was scheduled.
    pub fn step(&self) -> bool {
        // Release the queue before running: the frame may schedule another
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some(frame) => {
                frame();
                true
            }
            None => false,
        }
    }

    /// Step until the queue drains or `max_frames` have run
    pub fn run(&self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.step() {
            frames += 1;
        }
        frames
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_next(&self, frame: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(frame);
    }
}

/// Host that records everything the game shows
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    pub surface: RecordingSurface,
    /// Every value sent to the score display
    pub scores: Vec<u32>,
    /// Every end-of-session notice
    pub notices: Vec<String>,
}

impl Surface for HeadlessHost {
    fn clear(&mut self, origin: Vec2, size: Vec2) {
        self.surface.clear(origin, size);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.surface.fill_circle(center, radius, color);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.surface.fill_rect(origin, size, color);
    }
}

impl ScoreDisplay for HeadlessHost {
    fn show_score(&mut self, score: u32) {
        self.scores.push(score);
    }
}

impl SessionNotifier for HeadlessHost {
    fn notify(&mut self, message: &str) {
        info!("{message}");
        self.notices.push(message.to_string());
    }
}

/// Outcome of a headless demo session
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Frames simulated
    pub frames: u64,
    /// True if the ball was lost before the frame budget ran out
    pub finished: bool,
    pub state: GameState,
    pub host: HeadlessHost,
}

/// Play one session with the autopilot, for at most `max_frames` frames
pub fn run_demo(settings: &Settings, max_frames: u64) -> DemoReport {
    let game = game::shared(GameLoop::new(settings, HeadlessHost::default()));
    let scheduler = Rc::new(ManualScheduler::new());
    game::start(&game, &scheduler);

    let mut frames = 0;
    while frames < max_frames {
        let next = autopilot(game.borrow().state());
        if let Some(event) = next {
            game.borrow_mut().handle_input(event);
        }
        if !scheduler.step() {
            break;
        }
        frames += 1;
    }

    let game = game.borrow();
    DemoReport {
        frames,
        finished: game.state().is_over(),
        state: game.state().clone(),
        host: game.frontend().clone(),
    }
}
