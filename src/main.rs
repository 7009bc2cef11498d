//! Bounce Ball entry point
//!
//! Handles platform-specific initialization and starts the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use bounce_ball::game::{self, GameLoop, SharedGame};
    use bounce_ball::platform::web::{RafScheduler, WebHost, canvas_x};
    use bounce_ball::{InputEvent, Settings};

    type Game = SharedGame<WebHost>;

    /// Size the play area to the canvas backing store
    fn play_settings(canvas: &HtmlCanvasElement) -> Settings {
        let settings =
            Settings::default().with_play_area(canvas.width() as f32, canvas.height() as f32);
        match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("Canvas too small for default tuning ({e}), using defaults");
                Settings::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = play_settings(&canvas);
        let host = WebHost::new(window.clone(), &canvas, document.get_element_by_id("score"))
            .expect("no 2d context");
        let game = game::shared(GameLoop::new(&settings, host));
        let scheduler = Rc::new(RafScheduler::new(window.clone()));

        setup_input_handlers(&document, &canvas, game.clone());
        setup_reset_button(&document, game.clone(), scheduler.clone());

        game::start(&game, &scheduler);

        log::info!("Bounce Ball running!");
    }

    fn setup_input_handlers(document: &Document, canvas: &HtmlCanvasElement, game: Game) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::from_key(&event.key()) {
                    game.borrow_mut().handle_input(input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let x = canvas_x(&canvas_clone, event.client_x());
                game.borrow_mut().handle_input(InputEvent::PointerAt(x));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let x = canvas_x(&canvas_clone, touch.client_x());
                    let response = game.borrow_mut().handle_input(InputEvent::TouchAt(x));
                    if response.prevent_default {
                        event.prevent_default();
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(document: &Document, game: Game, scheduler: Rc<RafScheduler>) {
        if let Some(btn) = document.get_element_by_id("resetButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game::restart(&game, &scheduler);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No reset button found");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_ball::Settings;
    use bounce_ball::platform::run_demo;

    /// Frame budget for the headless demo (about five minutes at 60 Hz)
    const DEMO_MAX_FRAMES: u64 = 18_000;

    env_logger::init();
    log::info!("Bounce Ball (native) starting...");
    log::info!("Native mode plays a headless demo - run with `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {path}: {e}");
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let report = run_demo(&settings, DEMO_MAX_FRAMES);
    if report.finished {
        log::info!(
            "Demo over after {} frames: score {}, speed x{:.1}",
            report.frames,
            report.state.score,
            report.state.speed_factor
        );
    } else {
        log::info!(
            "Demo still running after {} frames: score {}",
            report.frames,
            report.state.score
        );
    }

    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&report.state) {
            log::debug!("Final state: {json}");
        }
    }

    println!("Final score: {}", report.state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
