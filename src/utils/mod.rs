//! Arithmetic and statistics helpers.

pub(crate) mod bits;
pub mod stats;
