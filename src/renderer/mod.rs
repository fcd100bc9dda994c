//! Canvas rendering module
//!
//! Draws a [`RunState`](crate::sim::RunState) with the 2D canvas API. Layout
//! comes straight from the simulation rects so what you see is what collides.

pub mod canvas;

pub use canvas::CanvasRenderer;
