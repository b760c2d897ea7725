//! Middle-product generator with an extra squaring step.
//!
//! The classic middle-product method multiplies the two previous outputs
//! and keeps the middle digits. This variant squares the product before
//! extracting the middle 32 bits, and guards against the zero fixed point
//! that the plain method is prone to.

use super::generator::Generator;
use crate::utils::bits;

/// Number of offsets probed before giving up on a non-zero candidate.
const MAX_PROBES: u32 = 1 << 16;

/// Escape distance applied to `r0` when every probe yields zero.
///
/// Found empirically; it breaks the zero fixed points seen in practice but
/// carries no guarantee.
const ESCAPE_OFFSET: u32 = 2;

/// Two-register middle-product-square generator.
///
/// Each step computes `((a * b)^2 >> 16) & 0xFFFF_FFFF` from the two state
/// registers, shifts the registers and stores the accepted value in `r1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleMulSquare {
    r0: u32,
    r1: u32,
}

impl MiddleMulSquare {
    /// Creates a generator from its two seed registers.
    pub fn new(r0: u32, r1: u32) -> Self {
        tracing::debug!(r0, r1, "middle mul square seeded");
        MiddleMulSquare { r0, r1 }
    }

    /// Returns the current `(r0, r1)` registers.
    pub fn state(&self) -> (u32, u32) {
        (self.r0, self.r1)
    }

    /// Middle 32 bits of `(a * b)^2`, computed without truncation.
    pub fn get_num(a: u32, b: u32) -> u32 {
        let product = a as u128 * b as u128;
        bits::middle_word(product * product)
    }

    /// Picks the next value, probing `r0 + offset` while the candidate is zero.
    fn next_candidate(&self) -> u32 {
        for offset in 0..MAX_PROBES {
            let candidate = Self::get_num(self.r0.wrapping_add(offset), self.r1);
            if candidate != 0 {
                if offset > 0 {
                    tracing::trace!(offset, candidate, "degeneracy guard probed");
                }
                return candidate;
            }
        }
        let escape = self.r0.wrapping_sub(ESCAPE_OFFSET);
        tracing::trace!(r0 = self.r0, escape, "degeneracy guard fell back to escape value");
        escape
    }
}

impl Generator for MiddleMulSquare {
    fn generate(&mut self) -> u32 {
        let accepted = self.next_candidate();
        self.r0 = self.r1;
        self.r1 = accepted;
        accepted
    }
}
