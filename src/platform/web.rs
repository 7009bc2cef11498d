//! Browser host
//!
//! Canvas 2D drawing, a DOM element for the score, `alert` for the
//! end-of-session notice and `requestAnimationFrame` for scheduling.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

use super::{FrameScheduler, ScoreDisplay, SessionNotifier};
use crate::renderer::{Color, Surface};

/// Host backed by a canvas and the surrounding page
pub struct WebHost {
    window: Window,
    ctx: CanvasRenderingContext2d,
    score: Option<Element>,
}

impl WebHost {
    /// Returns None if the canvas has no 2D context
    pub fn new(window: Window, canvas: &HtmlCanvasElement, score: Option<Element>) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { window, ctx, score })
    }
}

impl Surface for WebHost {
    fn clear(&mut self, origin: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }
}

impl ScoreDisplay for WebHost {
    fn show_score(&mut self, score: u32) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }
}

impl SessionNotifier for WebHost {
    fn notify(&mut self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            log::warn!("Could not show notice: {message}");
        }
    }
}

/// `requestAnimationFrame` scheduler
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_next(&self, frame: Box<dyn FnOnce()>) {
        let closure = Closure::once(move |_time: f64| frame());
        if self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed");
        }
        closure.forget();
    }
}

/// Convert a client-space x coordinate to canvas space
pub fn canvas_x(canvas: &HtmlCanvasElement, client_x: i32) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (client_x as f64 - rect.left()) as f32
}
