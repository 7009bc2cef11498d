//! Platform abstraction layer
//!
//! Capabilities the game loop needs from its host:
//! - Frame scheduling (`requestAnimationFrame` on web, a manual stepper headless)
//! - A score display
//! - A blocking end-of-session notice
//!
//! Drawing goes through [`crate::renderer::Surface`].

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{DemoReport, HeadlessHost, ManualScheduler, run_demo};

/// Runs a callback once, at the host's next frame
pub trait FrameScheduler {
    fn schedule_next(&self, frame: Box<dyn FnOnce()>);
}

/// Numeric score sink
pub trait ScoreDisplay {
    fn show_score(&mut self, score: u32);
}

/// Presents a message the player must acknowledge
pub trait SessionNotifier {
    fn notify(&mut self, message: &str);
}
