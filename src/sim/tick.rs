//! Per-frame simulation step
//!
//! `NotStarted --jump--> Playing --tick(hit)--> Over`. Everything that happens
//! to a run goes through [`step`], once per rendered frame.

use super::collision;
use super::rng::RandomSource;
use super::scroll::{mark_passed, scroll_pairs};
use super::spawner::{should_spawn, spawn_pair};
use super::state::{Field, RunPhase, RunState};
use crate::tuning::Tuning;

/// Input for a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Tap/click/key: override vertical velocity upward
    Jump,
    /// One animation frame elapsed
    Tick,
}

/// Fresh run for the given viewport
pub fn start_run(field: Field, tuning: &Tuning) -> RunState {
    log::info!("Run started on {}x{} field", field.width, field.height);
    RunState::new(field, tuning)
}

/// Advance `state` by one signal, returning the next state.
///
/// A terminal state is returned unchanged. On the tick that ends the run the
/// previous frame is kept and only the phase flips to `Over`.
pub fn step<R: RandomSource + ?Sized>(
    state: &RunState,
    signal: Signal,
    tuning: &Tuning,
    rng: &mut R,
) -> RunState {
    match (state.phase, signal) {
        (RunPhase::Over, _) | (RunPhase::NotStarted, Signal::Tick) => state.clone(),

        (RunPhase::NotStarted | RunPhase::Playing, Signal::Jump) => {
            let mut next = state.clone();
            next.phase = RunPhase::Playing;
            next.player.jump(tuning);
            next
        }

        (RunPhase::Playing, Signal::Tick) => {
            let mut next = state.clone();
            advance(&mut next, tuning, rng);

            let player = next.player.rect(tuning);
            match collision::detect(&player, &next.pairs, next.field) {
                Some(hit) => {
                    log::info!(
                        "Run over after {} frames, score {} ({:?})",
                        next.frame,
                        state.score,
                        hit
                    );
                    RunState {
                        phase: RunPhase::Over,
                        ..state.clone()
                    }
                }
                None => next,
            }
        }
    }
}

/// Physics, scroll/cull, spawn, score. Collision is the caller's job.
fn advance<R: RandomSource + ?Sized>(state: &mut RunState, tuning: &Tuning, rng: &mut R) {
    state.player.integrate(tuning);

    scroll_pairs(&mut state.pairs, tuning.scroll_speed);

    state.frame += 1;
    if should_spawn(state.frame, tuning) {
        state.pairs.push(spawn_pair(state.field, tuning, rng));
    }

    state.score += mark_passed(&mut state.pairs, tuning.player_x);
}
