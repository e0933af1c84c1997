//! Arithmetic modulo p = 2^61 - 1 with lazy reduction.
//!
//! Values travel in a `u64` in one of three states:
//! - raw: any 64-bit value;
//! - partially reduced: bits #63 and #62 are clear (value < 2^62);
//! - finalized: value < p.
//!
//! Up to 8 partially reduced values can be added before reducing, and sums of
//! four products can be combined with `add4` without finalizing in between.

use super::{FINALIZE_EXCLUDED, MASK63, PRIME};
use crate::utils::mul_128;

/// x = -x (without reduction modulo p)
///
/// Precondition: x <= p. The result is <= p.
#[inline(always)]
pub const fn negate(x: u64) -> u64 {
    debug_assert!(x <= PRIME);
    PRIME - x
}

/// Partially reduce a value modulo p, clearing bits #63 and #62.
///
/// The result can be passed directly to `add4` or `multiply`.
#[inline(always)]
pub const fn partial_reduce(x: u64) -> u64 {
    // Folding bits #63 to #61 may carry back into #61, so only #63 and #62
    // are guaranteed to be clear afterwards.
    (x & PRIME) + (x >> 61)
}

/// Finish reducing a partially reduced value. The result is < p.
///
/// Preconditions: bits #63 and #62 are clear, and x != 2^62 - 2. The excluded
/// value never comes out of `partial_reduce`, `add4` or `multiply`.
#[inline(always)]
pub const fn finalize(x: u64) -> u64 {
    debug_assert!(x >> 62 == 0);
    debug_assert!(x != FINALIZE_EXCLUDED);
    // Eliminate #61. The +1 also maps x = p to zero.
    (x + ((x + 1) >> 61)) & PRIME
}

/// x + y + z + w, partially reduced.
///
/// Preconditions: every operand is < 2^62.
#[inline(always)]
pub const fn add4(x: u64, y: u64, z: u64, w: u64) -> u64 {
    debug_assert!(x >> 62 == 0 && y >> 62 == 0 && z >> 62 == 0 && w >> 62 == 0);
    partial_reduce(x + y + z + w)
}

/*
    Largest x,y = p - 1 = 2^61 - 2 = L.

    L*L = 2^122 - 2^63 + 4, so the top 6 bits of the 128-bit product are zero.

    A set bit #64 in the high word is worth 2^64 = 8 (mod p), so high bits
    #124 to #64 land on low bits #63 to #3, and high bits #127 to #125 would
    land on #66 to #64. Low bits #63 to #61 fold onto #2 to #0.

    Folding the low word first keeps the sum inside 64 bits, which is why the
    high word is masked to 63 bits after the shift.
*/

/// x * y, partially reduced (result < 2^62, not finalized).
///
/// Precondition: bitlength(x) + bitlength(y) <= 124. Keeping both operands
/// partially reduced (62 bits each) satisfies it, as does a 61-bit x with a
/// 63-bit y.
#[inline(always)]
pub const fn multiply(x: u64, y: u64) -> u64 {
    debug_assert!(
        crate::utils::num_bits_u64(x) + crate::utils::num_bits_u64(y) <= 124
    );
    let (p_hi, p_lo) = mul_128(x, y);

    let mut r = (p_lo & PRIME) + (p_lo >> 61);
    r += (p_hi << 3) & MASK63;

    partial_reduce(r)
}

/// Sum of `coeffs[i] * values[i]` modulo p, finalized.
///
/// Every input must be partially reduced. Products are grouped four at a time
/// through `add4`, so only one `finalize` is paid per call.
pub fn weighted_sum(coeffs: &[u64], values: &[u64]) -> u64 {
    assert_eq!(coeffs.len(), values.len());

    let mut acc = 0u64;
    let mut c_chunks = coeffs.chunks_exact(3);
    let mut v_chunks = values.chunks_exact(3);
    for (c, v) in (&mut c_chunks).zip(&mut v_chunks) {
        acc = add4(
            acc,
            multiply(c[0], v[0]),
            multiply(c[1], v[1]),
            multiply(c[2], v[2]),
        );
    }
    for (c, v) in c_chunks.remainder().iter().zip(v_chunks.remainder().iter()) {
        acc = add4(acc, multiply(*c, *v), 0, 0);
    }

    finalize(acc)
}
