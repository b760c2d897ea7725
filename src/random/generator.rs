//! Generator trait implemented by every recurrence.
//!
//! Defines the single capability the analysis harness relies on. Each
//! implementation owns its own state registers and advances them only
//! from inside [`Generator::generate`].

/// Trait for pseudorandom generators driven by the analysis harness.
///
/// Implementations are deterministic: two instances built from the same
/// seeds produce the same output sequence.
pub trait Generator {
    /// Advances the internal state and returns the new 32-bit output.
    fn generate(&mut self) -> u32;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    fn generate(&mut self) -> u32 {
        (**self).generate()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self) -> u32 {
        (**self).generate()
    }
}
