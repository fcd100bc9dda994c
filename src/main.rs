//! Rooftop Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use rooftop_rush::renderer::CanvasRenderer;
    use rooftop_rush::sim::{Field, RunState, Signal, seeded, start_run, step};
    use rooftop_rush::{HighScore, Tuning};

    /// Which DOM screen is showing
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Screen {
        Start,
        Playing,
        GameOver,
    }

    /// Game instance holding all state
    struct Game {
        state: RunState,
        tuning: Tuning,
        rng: Pcg32,
        renderer: Option<CanvasRenderer>,
        high_score: HighScore,
        screen: Screen,
        /// Jump input received since the last frame
        pending_jump: bool,
    }

    impl Game {
        fn new(field: Field) -> Self {
            let tuning = Tuning::load();
            Self {
                state: RunState::new(field, &tuning),
                tuning,
                rng: seeded(js_sys::Date::now() as u64),
                renderer: None,
                high_score: HighScore::load(),
                screen: Screen::Start,
                pending_jump: false,
            }
        }

        fn field(&self) -> Field {
            match &self.renderer {
                Some(r) => Field::new(r.size.0, r.size.1),
                None => self.state.field,
            }
        }

        /// Begin a fresh run (start button / restart button)
        fn start(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.rng = seeded(seed);
            self.state = start_run(self.field(), &self.tuning);
            self.pending_jump = false;
            self.screen = Screen::Playing;
            log::info!("Run seed: {}", seed);
        }

        fn jump(&mut self) {
            if self.screen == Screen::Playing && !self.state.is_over() {
                self.pending_jump = true;
            }
        }

        /// One animation frame: merge pending input, then tick
        fn update(&mut self) {
            if self.screen != Screen::Playing {
                return;
            }

            if std::mem::take(&mut self.pending_jump) {
                self.state = step(&self.state, Signal::Jump, &self.tuning, &mut self.rng);
            }
            self.state = step(&self.state, Signal::Tick, &self.tuning, &mut self.rng);

            if self.state.is_over() {
                self.end_run();
            }
        }

        fn end_run(&mut self) {
            let score = self.state.score;
            if self.high_score.record(score) {
                self.high_score.save();
            }
            self.screen = Screen::GameOver;
        }

        fn resize(&mut self, width: f32, height: f32) {
            if let Some(r) = self.renderer.as_mut() {
                r.resize(width, height);
            }
            self.state.resize(Field::new(width, height));
        }

        fn render(&self) {
            if let Some(r) = &self.renderer {
                r.render(&self.state, &self.tuning);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
                }
            };
            let text = |id: &str, value: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(value));
                }
            };

            show("start-screen", self.screen == Screen::Start);
            show("game-over", self.screen == Screen::GameOver);
            show(
                "tap-prompt",
                self.screen == Screen::Playing && !self.state.is_started(),
            );

            text("hud-score", &self.state.score.to_string());
            text("final-score", &self.state.score.to_string());
            text("high-score", &self.high_score.best.to_string());
        }
    }

    fn resize_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width as f32, height as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rooftop Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = resize_canvas(&canvas);
        let game = Rc::new(RefCell::new(Game::new(Field::new(width, height))));

        match CanvasRenderer::new(&canvas) {
            Some(renderer) => game.borrow_mut().renderer = Some(renderer),
            None => log::error!("2D canvas context unavailable"),
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_resize(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Rooftop Rush running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        g.jump();
                    }
                    "Enter" if g.screen != Screen::Playing => g.start(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().start();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            } else {
                log::warn!("Missing #{id} button");
            }
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = resize_canvas(&canvas);
            game.borrow_mut().resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rooftop Rush (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);

    let summary = autopilot::run(seed, 36_000);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo run steered by a naive gap-chasing bot
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use serde::Serialize;

    use rooftop_rush::sim::{Field, RunState, Signal, seeded, start_run, step};
    use rooftop_rush::{HighScore, Tuning};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Summary {
        pub seed: u64,
        pub frames: u64,
        pub score: u64,
        pub crashed: bool,
        pub new_high_score: bool,
    }

    /// Centre of the next gap the player still has to clear
    fn target_y(state: &RunState, tuning: &Tuning) -> f32 {
        state
            .pairs
            .iter()
            .find(|p| p.right() >= tuning.player_x)
            .map(|p| (p.top_extent() + state.field.height - p.bottom_extent()) / 2.0)
            .unwrap_or(state.field.height / 2.0)
    }

    pub fn run(seed: u64, max_frames: u64) -> Summary {
        let tuning = Tuning::load();
        let mut rng = seeded(seed);
        let mut state = start_run(Field::new(800.0, 600.0), &tuning);
        state = step(&state, Signal::Jump, &tuning, &mut rng);

        while !state.is_over() && state.frame < max_frames {
            let centre = state.player.y + tuning.player_height / 2.0;
            if centre > target_y(&state, &tuning) + 10.0 && state.player.vy > 0.0 {
                state = step(&state, Signal::Jump, &tuning, &mut rng);
            }
            state = step(&state, Signal::Tick, &tuning, &mut rng);
        }

        let mut high_score = HighScore::load();
        let new_high_score = high_score.record(state.score);
        if new_high_score {
            high_score.save();
        }

        log::info!("Autopilot finished: score {} in {} frames", state.score, state.frame);

        Summary {
            seed,
            frames: state.frame,
            score: state.score,
            crashed: state.is_over(),
            new_high_score,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_determinism() {
            let a = run(1, 600);
            let b = run(1, 600);
            assert_eq!(a, b);
            assert!(a.frames <= 600);
        }
    }
}
