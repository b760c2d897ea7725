//! Quadratic congruential generator.
//!
//! Extends the linear congruential method with a squared term:
//! `r(i+1) = (l * r(i)^2 + k * r(i) + b) mod m`.

use super::generator::Generator;
use crate::error::SquareGenError;

/// Quadratic congruential generator with fixed coefficients.
///
/// The coefficients and modulus are immutable after construction; only
/// the state register `r0` advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareCongruentGenerator {
    r0: u32,
    l: u32,
    k: u32,
    b: u32,
    m: u32,
}

impl SquareCongruentGenerator {
    /// Creates a generator from its seed, coefficients and modulus.
    ///
    /// # Parameters
    /// - `r0`: Initial state.
    /// - `l`: Coefficient of the squared term.
    /// - `k`: Coefficient of the linear term.
    /// - `b`: Constant term.
    /// - `m`: Modulus.
    ///
    /// # Errors
    /// Returns [`SquareGenError::ZeroModulus`] if `m == 0`.
    pub fn new(r0: u32, l: u32, k: u32, b: u32, m: u32) -> Result<Self, SquareGenError> {
        if m == 0 {
            return Err(SquareGenError::ZeroModulus);
        }
        tracing::debug!(r0, l, k, b, m, "square congruent generator seeded");
        Ok(SquareCongruentGenerator { r0, l, k, b, m })
    }

    /// Returns the current state register.
    pub fn state(&self) -> u32 {
        self.r0
    }

    /// Pure step function: next state for the given state.
    pub fn get_num(&self, r0: u32) -> u32 {
        let r = r0 as u128;
        let sum = self.l as u128 * r * r + self.k as u128 * r + self.b as u128;
        (sum % self.m as u128) as u32
    }
}

impl Generator for SquareCongruentGenerator {
    fn generate(&mut self) -> u32 {
        let result = self.get_num(self.r0);
        self.r0 = result;
        result
    }
}
