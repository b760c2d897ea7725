//! Experimentation harness for square-modified weak PRNG schemes.
//!
//! Three classic weak generators, each altered with a squaring step, are
//! exposed behind a single [`Generator`] trait. The [`harness`] drives any
//! of them for a fixed number of steps and reports when the output first
//! repeats, whether it collapses to zero and how long the run took.
//!
//! # Architecture
//!
//! ```text
//! Generator (trait — generate() -> u32)
//!     ├── MiddleMulSquare           (r0, r1)  middle bits of (r0*r1)^2, zero-guarded
//!     ├── ShuffleSquare             r0        (rol8 + ror8 mod u32::MAX)^2
//!     └── SquareCongruentGenerator  r0        (l*r0^2 + k*r0 + b) mod m
//! harness::analyze (first repeat, zero collapse, elapsed time)
//! ```
//!
//! # Examples
//!
//! Detect the period of a small quadratic congruential sequence:
//!
//! ```
//! use squaregen::harness;
//! use squaregen::random::square_congruent::SquareCongruentGenerator;
//!
//! let mut gen = SquareCongruentGenerator::new(1, 1, 1, 1, 7).unwrap();
//! let report = harness::analyze(&mut gen, 1000);
//!
//! // 3, 6, 1, 3, ... repeats at the fourth output.
//! assert_eq!(report.first_repeat, Some(4));
//! assert!(!report.collapsed());
//! ```
//!
//! A zero seed collapses the shuffle generator immediately:
//!
//! ```
//! use squaregen::harness;
//! use squaregen::random::shuffle_square::ShuffleSquare;
//!
//! let report = harness::analyze(&mut ShuffleSquare::new(0), 1000);
//! assert_eq!(report.collapsed_at, Some(1));
//! ```

#![deny(clippy::all)]

pub mod cli;
pub mod error;
pub mod harness;
pub mod random;
pub mod utils;

pub use random::generator::Generator;
