//! Shuffle (mixing) generator that squares the mixed sum.
//!
//! The state word is rotated left and right by one byte, the two rotations
//! are added, reduced modulo `u32::MAX` and the reduced sum is squared.

use super::generator::Generator;
use crate::utils::bits;

/// Byte-sized rotation distance used by the mixing step.
const ROTATION: u32 = 8;

/// Single-register shuffle-square generator.
///
/// There is no degeneracy guard: a zero state maps to zero forever, which
/// the harness reports as a collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleSquare {
    r0: u32,
}

impl ShuffleSquare {
    /// Creates a generator from its seed register.
    pub fn new(r0: u32) -> Self {
        tracing::debug!(r0, "shuffle square seeded");
        ShuffleSquare { r0 }
    }

    /// Returns the current state register.
    pub fn state(&self) -> u32 {
        self.r0
    }

    /// Pure step function: next state for the given state.
    pub fn get_num(r0: u32) -> u32 {
        let left = bits::word_left_rotation(r0, ROTATION);
        let right = bits::shuffle_right_rotation(r0);
        // Modulus is 2^32 - 1, not 2^32. Kept as observed.
        let reduced = left.wrapping_add(right) % u32::MAX;
        bits::widened_square(reduced) as u32
    }
}

impl Generator for ShuffleSquare {
    fn generate(&mut self) -> u32 {
        let result = Self::get_num(self.r0);
        self.r0 = result;
        result
    }
}
