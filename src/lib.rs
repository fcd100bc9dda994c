//! Rooftop Rush - a side-scrolling glider arcade game
//!
//! Core modules:
//! - `sim`: Pure per-frame simulation (physics, spawning, scoring, collisions)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best score persistence
//! - `renderer`: Canvas 2D drawing (wasm32 only)

pub mod highscores;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.15;
    /// Velocity set by a jump (pixels/tick, negative = up)
    pub const JUMP_FORCE: f32 = -3.8;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 24.0;
    /// Fixed left edge of the player
    pub const PLAYER_X: f32 = 100.0;

    /// Obstacle scroll speed (pixels/tick)
    pub const SCROLL_SPEED: f32 = 1.8;
    /// Width of each obstacle pair
    pub const PAIR_WIDTH: f32 = 80.0;
    /// Vertical gap between top and bottom clusters
    pub const GAP_SIZE: f32 = 200.0;
    /// Frames between spawns (~2.5s at 60fps)
    pub const SPAWN_INTERVAL: u64 = 150;
    /// Gap keeps at least this far from the field top and bottom
    pub const GAP_MARGIN: f32 = 100.0;

    /// Narrowest rooftop slab
    pub const MIN_SEGMENT_WIDTH: f32 = 25.0;
    /// Shortest slab relative to its cluster's available height
    pub const MIN_HEIGHT_FRACTION: f32 = 0.5;
}
