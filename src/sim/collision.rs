//! Collision detection between the glider, the field bounds and rooftops
//!
//! Everything is axis-aligned, so a hit is a strict rectangle overlap.

use super::geometry::Rect;
use super::state::{Field, ObstaclePair};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Fell through the floor or flew above the ceiling
    Bounds,
    /// Hit a segment of the pair at this index
    Obstacle { pair: usize },
}

/// Player's top edge is above the field or bottom edge is below it
#[inline]
pub fn out_of_bounds(player: &Rect, field: Field) -> bool {
    player.bottom() > field.height || player.y < 0.0
}

/// Test the player against every segment of one pair, top cluster first
pub fn hits_pair(player: &Rect, pair: &ObstaclePair, field: Field) -> bool {
    pair.top_rects().any(|r| player.intersects(&r))
        || pair.bottom_rects(field.height).any(|r| player.intersects(&r))
}

/// Bounds check, then each pair in order. Stops at the first hit.
pub fn detect(player: &Rect, pairs: &[ObstaclePair], field: Field) -> Option<Collision> {
    if out_of_bounds(player, field) {
        return Some(Collision::Bounds);
    }

    pairs
        .iter()
        .position(|pair| hits_pair(player, pair, field))
        .map(|pair| Collision::Obstacle { pair })
}
