//! Bit manipulation helpers shared by the generator recurrences.
//!
//! All helpers operate on 32-bit words, the output width of every
//! generator, and widen to `u64`/`u128` only where a product would
//! otherwise overflow.

/// Rotates a 32-bit word left by `shift` bit positions (circular).
///
/// `shift` is taken modulo 32.
pub(crate) fn word_left_rotation(value: u32, shift: u32) -> u32 {
    value.rotate_left(shift % 32)
}

/// Right-hand mixing term of the shuffle scheme.
///
/// Computes `(value >> 8) | ((value & 0xFFFF) << 24)` in 32-bit
/// arithmetic. The upper byte of the masked half is shifted out, so the
/// result coincides with a circular right rotation by 8.
pub(crate) fn shuffle_right_rotation(value: u32) -> u32 {
    (value >> 8) | ((value & 0xFFFF) << 24)
}

/// Extracts the 32-bit word at bits 16..47 of a widened product.
pub(crate) fn middle_word(value: u128) -> u32 {
    ((value >> 16) & 0xFFFF_FFFF) as u32
}

/// Squares a 32-bit word without overflow.
pub(crate) fn widened_square(value: u32) -> u64 {
    let wide = value as u64;
    wide * wide
}
