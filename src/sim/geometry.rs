//! Axis-aligned rectangles in screen space
//!
//! Origin is the field's top-left corner, y grows downward.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_rect_intersects() {
        let player = Rect::new(100.0, 50.0, 40.0, 24.0);
        let segment = Rect::new(90.0, 0.0, 80.0, 100.0);
        assert!(player.intersects(&segment));
        assert!(segment.intersects(&player));
    }

    #[test]
    fn test_shared_edge_does_not_intersect() {
        let player = Rect::new(100.0, 50.0, 40.0, 24.0);
        // player right edge == segment left edge
        let right = Rect::new(140.0, 0.0, 80.0, 100.0);
        assert!(!player.intersects(&right));
        // player top edge == segment bottom edge
        let above = Rect::new(90.0, 0.0, 80.0, 50.0);
        assert!(!player.intersects(&above));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&b));
        let c = Rect::new(20.0, 0.0, 5.0, 5.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_zero_size_rect_never_intersects_its_edge() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = Rect::new(0.0, 10.0, 10.0, 0.0);
        assert!(!a.intersects(&flat));
    }
}
