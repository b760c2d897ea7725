//! Closed set of generator variants selectable at run time.

use super::generator::Generator;
use super::middle_mul_square::MiddleMulSquare;
use super::shuffle_square::ShuffleSquare;
use super::square_congruent::SquareCongruentGenerator;
use crate::error::SquareGenError;

/// Generator family picked by the numeric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    MiddleMulSquare,
    ShuffleSquare,
    SquareCongruent,
}

impl GeneratorKind {
    /// Maps a selector to a generator family.
    ///
    /// `3` is accepted as an alias of `2`.
    ///
    /// # Errors
    /// Returns [`SquareGenError::UnknownGenerator`] outside `[0, 3]`.
    pub fn from_selector(selector: i64) -> Result<Self, SquareGenError> {
        match selector {
            0 => Ok(GeneratorKind::MiddleMulSquare),
            1 => Ok(GeneratorKind::ShuffleSquare),
            2 | 3 => Ok(GeneratorKind::SquareCongruent),
            other => Err(SquareGenError::UnknownGenerator(other)),
        }
    }

    /// Number of seed arguments the family is built from.
    pub fn seed_arity(self) -> usize {
        match self {
            GeneratorKind::MiddleMulSquare => 2,
            GeneratorKind::ShuffleSquare => 1,
            GeneratorKind::SquareCongruent => 5,
        }
    }

    /// Seed argument names in command-line order.
    pub fn seed_names(self) -> &'static str {
        match self {
            GeneratorKind::MiddleMulSquare => "r0 r1",
            GeneratorKind::ShuffleSquare => "r0",
            GeneratorKind::SquareCongruent => "r0 l k b m",
        }
    }

    /// Human-readable name, as listed in the usage text.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::MiddleMulSquare => "middle multiply square",
            GeneratorKind::ShuffleSquare => "shuffle square",
            GeneratorKind::SquareCongruent => "square congruent generator",
        }
    }
}

/// A fully seeded generator of any family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    MiddleMulSquare(MiddleMulSquare),
    ShuffleSquare(ShuffleSquare),
    SquareCongruent(SquareCongruentGenerator),
}

impl AnyGenerator {
    /// Builds a generator of `kind` from its seed arguments.
    ///
    /// # Errors
    /// - [`SquareGenError::SeedArity`] if `seeds.len()` differs from
    ///   [`GeneratorKind::seed_arity`].
    /// - [`SquareGenError::ZeroModulus`] for a square congruent generator
    ///   with modulus zero.
    pub fn from_seeds(kind: GeneratorKind, seeds: &[u32]) -> Result<Self, SquareGenError> {
        let expected = kind.seed_arity();
        if seeds.len() != expected {
            return Err(SquareGenError::SeedArity {
                expected,
                found: seeds.len(),
            });
        }
        let generator = match (kind, seeds) {
            (GeneratorKind::MiddleMulSquare, &[r0, r1]) => {
                AnyGenerator::MiddleMulSquare(MiddleMulSquare::new(r0, r1))
            }
            (GeneratorKind::ShuffleSquare, &[r0]) => {
                AnyGenerator::ShuffleSquare(ShuffleSquare::new(r0))
            }
            (GeneratorKind::SquareCongruent, &[r0, l, k, b, m]) => {
                AnyGenerator::SquareCongruent(SquareCongruentGenerator::new(r0, l, k, b, m)?)
            }
            _ => {
                return Err(SquareGenError::SeedArity {
                    expected,
                    found: seeds.len(),
                })
            }
        };
        Ok(generator)
    }

    /// Family of the wrapped generator.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            AnyGenerator::MiddleMulSquare(_) => GeneratorKind::MiddleMulSquare,
            AnyGenerator::ShuffleSquare(_) => GeneratorKind::ShuffleSquare,
            AnyGenerator::SquareCongruent(_) => GeneratorKind::SquareCongruent,
        }
    }
}

impl Generator for AnyGenerator {
    fn generate(&mut self) -> u32 {
        match self {
            AnyGenerator::MiddleMulSquare(g) => g.generate(),
            AnyGenerator::ShuffleSquare(g) => g.generate(),
            AnyGenerator::SquareCongruent(g) => g.generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_range() {
        assert_eq!(
            GeneratorKind::from_selector(0),
            Ok(GeneratorKind::MiddleMulSquare)
        );
        assert_eq!(
            GeneratorKind::from_selector(1),
            Ok(GeneratorKind::ShuffleSquare)
        );
        assert_eq!(
            GeneratorKind::from_selector(2),
            Ok(GeneratorKind::SquareCongruent)
        );
        assert_eq!(
            GeneratorKind::from_selector(4),
            Err(SquareGenError::UnknownGenerator(4))
        );
        assert_eq!(
            GeneratorKind::from_selector(-1),
            Err(SquareGenError::UnknownGenerator(-1))
        );
    }

    #[test]
    fn test_selector_three_aliases_congruent() {
        assert_eq!(
            GeneratorKind::from_selector(3),
            GeneratorKind::from_selector(2)
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = AnyGenerator::from_seeds(GeneratorKind::MiddleMulSquare, &[1]).unwrap_err();
        assert_eq!(
            err,
            SquareGenError::SeedArity {
                expected: 2,
                found: 1
            }
        );
        let err = AnyGenerator::from_seeds(GeneratorKind::ShuffleSquare, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            SquareGenError::SeedArity {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_zero_modulus_propagates() {
        let err =
            AnyGenerator::from_seeds(GeneratorKind::SquareCongruent, &[1, 2, 3, 4, 0]).unwrap_err();
        assert_eq!(err, SquareGenError::ZeroModulus);
    }

    #[test]
    fn test_dispatch_matches_concrete() {
        let mut any = AnyGenerator::from_seeds(GeneratorKind::SquareCongruent, &[1, 1, 1, 1, 7])
            .unwrap();
        let mut concrete = SquareCongruentGenerator::new(1, 1, 1, 1, 7).unwrap();
        assert_eq!(any.kind(), GeneratorKind::SquareCongruent);
        for _ in 0..10 {
            assert_eq!(any.generate(), concrete.generate());
        }
    }
}
