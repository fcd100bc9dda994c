//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed step per frame, no delta-time scaling
//! - Randomness only through an injected [`RandomSource`]
//! - Stable iteration order (spawn order = left to right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod physics;
pub mod rng;
pub mod scroll;
pub mod segments;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Collision, detect, hits_pair, out_of_bounds};
pub use geometry::Rect;
pub use rng::{RandomSource, seeded};
pub use scroll::{mark_passed, scroll_pairs};
pub use segments::generate_segments;
pub use spawner::{gap_top, should_spawn, spawn_pair};
pub use state::{Field, ObstaclePair, Player, RunPhase, RunState, Segment};
pub use tick::{Signal, start_run, step};
