//! Run state and core simulation types

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Phase of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the first jump, nothing moves
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    Over,
}

/// Visible play area, sized to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The glider's vertical motion. Horizontal position is fixed by tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub y: f32,
    pub vy: f32,
}

impl Player {
    /// Player resting vertically centred in the field
    pub fn centered(field: Field, tuning: &Tuning) -> Self {
        Self {
            y: field.height / 2.0 - tuning.player_height / 2.0,
            vy: 0.0,
        }
    }

    /// Bounding box at the current position
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            tuning.player_x,
            self.y,
            tuning.player_width,
            tuning.player_height,
        )
    }
}

/// One rooftop slab in an obstacle cluster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub width: f32,
    pub height: f32,
}

/// A top and bottom cluster with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge, decreasing as the field scrolls
    pub x: f32,
    pub width: f32,
    /// Hanging from the top of the field, left to right
    pub top: Vec<Segment>,
    /// Standing on the bottom of the field, left to right
    pub bottom: Vec<Segment>,
    /// Already counted toward the score
    pub passed: bool,
}

impl ObstaclePair {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Rectangles of the top cluster, anchored at the field top
    pub fn top_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.top.iter().scan(self.x, |cursor, seg| {
            let rect = Rect::new(*cursor, 0.0, seg.width, seg.height);
            *cursor += seg.width;
            Some(rect)
        })
    }

    /// Rectangles of the bottom cluster, anchored at the field bottom
    pub fn bottom_rects(&self, field_height: f32) -> impl Iterator<Item = Rect> + '_ {
        self.bottom.iter().scan(self.x, move |cursor, seg| {
            let rect = Rect::new(*cursor, field_height - seg.height, seg.width, seg.height);
            *cursor += seg.width;
            Some(rect)
        })
    }

    /// Tallest segment in the top cluster
    pub fn top_extent(&self) -> f32 {
        max_height(&self.top)
    }

    /// Tallest segment in the bottom cluster
    pub fn bottom_extent(&self) -> f32 {
        max_height(&self.bottom)
    }
}

fn max_height(segments: &[Segment]) -> f32 {
    segments.iter().map(|s| s.height).fold(0.0, f32::max)
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub field: Field,
    pub player: Player,
    /// Active pairs in spawn order (also left-to-right)
    pub pairs: Vec<ObstaclePair>,
    pub score: u64,
    /// Simulated frames since the first jump
    pub frame: u64,
    pub phase: RunPhase,
}

impl RunState {
    /// Fresh run: centred static player, no obstacles, zero score
    pub fn new(field: Field, tuning: &Tuning) -> Self {
        Self {
            field,
            player: Player::centered(field, tuning),
            pairs: Vec::new(),
            score: 0,
            frame: 0,
            phase: RunPhase::NotStarted,
        }
    }

    /// The first jump has happened
    pub fn is_started(&self) -> bool {
        self.phase != RunPhase::NotStarted
    }

    pub fn is_over(&self) -> bool {
        self.phase == RunPhase::Over
    }

    /// Viewport changed. Later spawns use the new size, bounds checks use the
    /// new floor, and live bottom clusters re-anchor to it.
    pub fn resize(&mut self, field: Field) {
        self.field = field;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ObstaclePair {
        ObstaclePair {
            x: 300.0,
            width: 80.0,
            top: vec![
                Segment { width: 30.0, height: 90.0 },
                Segment { width: 50.0, height: 60.0 },
            ],
            bottom: vec![Segment { width: 80.0, height: 120.0 }],
            passed: false,
        }
    }

    #[test]
    fn test_new_run_is_centered_and_idle() {
        let state = RunState::new(Field::new(800.0, 600.0), &Tuning::default());
        assert_eq!(state.player.y, 288.0);
        assert_eq!(state.player.vy, 0.0);
        assert!(state.pairs.is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.is_started());
        assert!(!state.is_over());
    }

    #[test]
    fn test_top_rects_accumulate_offset() {
        let rects: Vec<_> = pair().top_rects().collect();
        assert_eq!(rects[0], Rect::new(300.0, 0.0, 30.0, 90.0));
        assert_eq!(rects[1], Rect::new(330.0, 0.0, 50.0, 60.0));
    }

    #[test]
    fn test_bottom_rects_anchor_to_field_bottom() {
        let rects: Vec<_> = pair().bottom_rects(600.0).collect();
        assert_eq!(rects, vec![Rect::new(300.0, 480.0, 80.0, 120.0)]);
    }

    #[test]
    fn test_resize_reanchors_bottom_cluster() {
        let tuning = Tuning::default();
        let mut state = RunState::new(Field::new(800.0, 600.0), &tuning);
        state.pairs.push(ObstaclePair {
            x: 300.0,
            width: 80.0,
            top: vec![Segment { width: 80.0, height: 50.0 }],
            bottom: vec![Segment { width: 80.0, height: 100.0 }],
            passed: false,
        });
        let bottom = |s: &RunState| s.pairs[0].bottom_rects(s.field.height).collect::<Vec<_>>();
        let top = |s: &RunState| s.pairs[0].top_rects().collect::<Vec<_>>();

        assert_eq!(bottom(&state), vec![Rect::new(300.0, 500.0, 80.0, 100.0)]);
        let top_before = top(&state);

        state.resize(Field::new(1024.0, 400.0));
        assert_eq!(state.field, Field::new(1024.0, 400.0));
        assert_eq!(bottom(&state), vec![Rect::new(300.0, 300.0, 80.0, 100.0)]);
        assert_eq!(top(&state), top_before);
        assert_eq!(state.pairs[0].x, 300.0);
    }

    #[test]
    fn test_extents() {
        let p = pair();
        assert_eq!(p.top_extent(), 90.0);
        assert_eq!(p.bottom_extent(), 120.0);
        assert_eq!(p.right(), 380.0);
    }
}
