//! Obstacle pair spawning

use super::rng::RandomSource;
use super::segments::generate_segments;
use super::state::{Field, ObstaclePair};
use crate::tuning::Tuning;

/// Whether a pair spawns on this (already incremented) frame
#[inline]
pub fn should_spawn(frame: u64, tuning: &Tuning) -> bool {
    tuning.spawn_interval != 0 && frame % tuning.spawn_interval == 0
}

/// Pick the top boundary of the gap.
///
/// Uniform over the integers in `[gap_margin, height - gap - gap_margin]`.
/// A field too short for the margins collapses the range instead of failing,
/// and the gap never extends past the field when the field can hold it.
pub fn gap_top<R: RandomSource + ?Sized>(field: Field, tuning: &Tuning, rng: &mut R) -> f32 {
    let room = (field.height - tuning.gap_size).max(0.0);
    let lo = tuning.gap_margin.min(room);
    let hi = (field.height - tuning.gap_size - tuning.gap_margin).clamp(lo, room);

    let top = (rng.next_unit() * (hi - lo + 1.0)).floor() + lo;
    top.min(hi)
}

/// Build a new pair at the right edge of the field
pub fn spawn_pair<R: RandomSource + ?Sized>(
    field: Field,
    tuning: &Tuning,
    rng: &mut R,
) -> ObstaclePair {
    let top_boundary = gap_top(field, tuning, rng);
    let bottom_boundary = top_boundary + tuning.gap_size;

    let top = generate_segments(tuning.pair_width, top_boundary, tuning, rng);
    let bottom = generate_segments(
        tuning.pair_width,
        (field.height - bottom_boundary).max(0.0),
        tuning,
        rng,
    );

    log::debug!(
        "Spawned pair at x={} gap=[{}, {}] segments={}+{}",
        field.width,
        top_boundary,
        bottom_boundary,
        top.len(),
        bottom.len()
    );

    ObstaclePair {
        x: field.width,
        width: tuning.pair_width,
        top,
        bottom,
        passed: false,
    }
}
