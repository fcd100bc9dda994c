//! Rooftop segment generation
//!
//! Splits a cluster's span into contiguous slabs of varied width and height.

use super::rng::RandomSource;
use super::state::Segment;
use crate::tuning::Tuning;

/// Partition `span` into segments whose widths sum to `span`.
///
/// Each candidate width is `floor(r * span / 2) + min_segment_width`, clamped
/// to what is left. A leftover narrower than `min_segment_width` is absorbed
/// into the current segment. Heights fall in
/// `[min_height_fraction * max_height, max_height)`.
pub fn generate_segments<R: RandomSource + ?Sized>(
    span: f32,
    max_height: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<Segment> {
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let max_height = if max_height.is_finite() { max_height.max(0.0) } else { 0.0 };
    let min_width = tuning.min_segment_width;
    let fraction = tuning.min_height_fraction;

    let mut segments = Vec::new();
    let mut remaining = span;

    while remaining > 0.0 {
        let mut width = (rng.next_unit() * (span / 2.0)).floor() + min_width;
        width = width.min(remaining);
        if width <= 0.0 || remaining - width < min_width {
            width = remaining;
        }

        let height = max_height * (rng.next_unit() * (1.0 - fraction) + fraction);

        segments.push(Segment { width, height });
        remaining -= width;
    }

    segments
}
