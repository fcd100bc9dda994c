//! Vertical motion of the glider
//!
//! Fixed step, semi-implicit Euler: velocity first, then position.

use super::state::Player;
use crate::tuning::Tuning;

impl Player {
    /// Override vertical velocity with the jump impulse. Jumps do not stack.
    #[inline]
    pub fn jump(&mut self, tuning: &Tuning) {
        self.vy = tuning.jump_force;
    }

    /// Advance one tick under gravity
    #[inline]
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.vy += tuning.gravity;
        self.y += self.vy;
    }
}
