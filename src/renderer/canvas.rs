//! 2D canvas drawing

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{Rect, RunState};
use crate::tuning::Tuning;

const SKY_TOP: &str = "#2c0b0e";
const SKY_BOTTOM: &str = "#000000";
const ROOFTOP: &str = "#1a1a24";
const ROOFTOP_EDGE: &str = "#3a3a4a";
const PLAYER: &str = "#f5d742";
const SCORE: &str = "#ffffff";

/// Owns the canvas context and its CSS pixel size
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    pub size: (f32, f32),
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`. None if the browser refuses one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let size = (canvas.width() as f32, canvas.height() as f32);
        Some(Self { ctx, size })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = (width, height);
    }

    /// Draw one frame
    pub fn render(&self, state: &RunState, tuning: &Tuning) {
        self.draw_sky();

        for pair in &state.pairs {
            for rect in pair.top_rects().chain(pair.bottom_rects(state.field.height)) {
                self.draw_rooftop(&rect);
            }
        }

        self.fill(&state.player.rect(tuning), PLAYER);

        if state.is_started() {
            self.draw_score(state.score);
        }
    }

    fn draw_sky(&self) {
        let (w, h) = self.size;
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h as f64);
        let _ = gradient.add_color_stop(0.0, SKY_TOP);
        let _ = gradient.add_color_stop(1.0, SKY_BOTTOM);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn draw_rooftop(&self, rect: &Rect) {
        self.fill(rect, ROOFTOP);
        self.ctx.set_stroke_style_str(ROOFTOP_EDGE);
        self.ctx.stroke_rect(
            rect.x as f64,
            rect.y as f64,
            rect.w as f64,
            rect.h as f64,
        );
    }

    fn draw_score(&self, score: u64) {
        self.ctx.set_fill_style_str(SCORE);
        self.ctx.set_font("bold 48px sans-serif");
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text(&score.to_string(), (self.size.0 / 2.0) as f64, 64.0);
    }

    fn fill(&self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.w as f64,
            rect.h as f64,
        );
    }
}
