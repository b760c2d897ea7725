//! Error types for the squaregen library.

use std::fmt;

/// Errors produced by the squaregen library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareGenError {
    /// Fewer than the two mandatory arguments (GENERATOR COUNT) were given.
    MissingArguments,
    /// Generator selector is outside the valid range [0, 3].
    UnknownGenerator(i64),
    /// Number of seeds does not match the arity of the selected generator.
    SeedArity { expected: usize, found: usize },
    /// An argument could not be parsed.
    InvalidArgument(String),
    /// Square congruent generator was given a modulus of zero.
    ZeroModulus,
    /// Captured samples could not be written out.
    SampleWrite(String),
}

impl SquareGenError {
    /// Returns `true` for errors that should be answered with the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            SquareGenError::MissingArguments
                | SquareGenError::UnknownGenerator(_)
                | SquareGenError::SeedArity { .. }
                | SquareGenError::InvalidArgument(_)
        )
    }
}

impl fmt::Display for SquareGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareGenError::MissingArguments => {
                write!(f, "GENERATOR and COUNT are required")
            }
            SquareGenError::UnknownGenerator(selector) => {
                write!(f, "Generator {} is outside the valid range [0, 3]", selector)
            }
            SquareGenError::SeedArity { expected, found } => {
                write!(
                    f,
                    "Generator expects {} seed(s), {} given",
                    expected, found
                )
            }
            SquareGenError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {}", msg)
            }
            SquareGenError::ZeroModulus => {
                write!(f, "Modulus must be greater than zero")
            }
            SquareGenError::SampleWrite(msg) => {
                write!(f, "Unable to write samples: {}", msg)
            }
        }
    }
}

impl std::error::Error for SquareGenError {}
