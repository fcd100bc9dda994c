//! Scrolling, culling and pass scoring for obstacle pairs

use super::state::ObstaclePair;

/// Shift every pair left by `speed` and drop pairs fully past the left edge.
/// Order of the survivors is preserved.
pub fn scroll_pairs(pairs: &mut Vec<ObstaclePair>, speed: f32) {
    for pair in pairs.iter_mut() {
        pair.x -= speed;
    }
    pairs.retain(|p| p.right() > 0.0);
}

/// Mark pairs whose trailing edge moved behind `player_x`.
/// Returns the number of newly passed pairs.
pub fn mark_passed(pairs: &mut [ObstaclePair], player_x: f32) -> u64 {
    let mut passed = 0;
    for pair in pairs.iter_mut().filter(|p| !p.passed) {
        if pair.right() < player_x {
            pair.passed = true;
            passed += 1;
        }
    }
    passed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_at(x: f32) -> ObstaclePair {
        ObstaclePair {
            x,
            width: 80.0,
            top: Vec::new(),
            bottom: Vec::new(),
            passed: false,
        }
    }

    #[test]
    fn test_scroll_moves_left() {
        let mut pairs = vec![pair_at(500.0), pair_at(700.0)];
        scroll_pairs(&mut pairs, 1.8);
        assert_eq!(pairs.len(), 2);
        assert!((pairs[0].x - 498.2).abs() < 1e-4);
        assert!((pairs[1].x - 698.2).abs() < 1e-4);
    }

    #[test]
    fn test_cull_at_left_edge_is_stable() {
        let mut pairs = vec![pair_at(-79.0), pair_at(-70.0), pair_at(300.0)];
        // -79 - 1 = -80 -> right edge exactly 0 -> removed
        scroll_pairs(&mut pairs, 1.0);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].x, -71.0);
        assert_eq!(pairs[1].x, 299.0);
    }

    #[test]
    fn test_pass_counts_once() {
        let mut pairs = vec![pair_at(19.0)];
        // right edge 99 < 100
        assert_eq!(mark_passed(&mut pairs, 100.0), 1);
        assert!(pairs[0].passed);
        assert_eq!(mark_passed(&mut pairs, 100.0), 0);
        pairs[0].x -= 50.0;
        assert_eq!(mark_passed(&mut pairs, 100.0), 0);
    }

    #[test]
    fn test_trailing_edge_on_player_is_not_passed() {
        let mut pairs = vec![pair_at(20.0)];
        // right edge == player_x
        assert_eq!(mark_passed(&mut pairs, 100.0), 0);
        assert!(!pairs[0].passed);
    }

    #[test]
    fn test_multiple_pairs_pass_together() {
        let mut pairs = vec![pair_at(-10.0), pair_at(0.0), pair_at(200.0)];
        assert_eq!(mark_passed(&mut pairs, 100.0), 2);
        assert!(!pairs[2].passed);
    }
}
