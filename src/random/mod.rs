//! Generator subsystem.
//!
//! Provides the [`Generator`](generator::Generator) trait and the three
//! square-modified recurrences it is implemented by, plus
//! [`AnyGenerator`](any_generator::AnyGenerator) for run-time selection.

pub mod any_generator;
pub mod generator;
pub mod middle_mul_square;
pub mod shuffle_square;
pub mod square_congruent;
