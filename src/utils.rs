#[inline(always)]
pub const fn split(x: u128) -> (u64, u64) {
    (x as u64, (x >> 64) as u64)
}

#[inline]
pub const fn num_bits_u64(n: u64) -> usize {
    (64 - n.leading_zeros()) as usize
}

/// Full 64x64 -> 128 bit product, returned as `(hi, lo)`.
#[inline(always)]
#[cfg(not(feature = "emulated_mul128"))]
pub(crate) const fn mul_128(x: u64, y: u64) -> (u64, u64) {
    let (lo, hi) = split((x as u128) * (y as u128));
    (hi, lo)
}

#[inline(always)]
#[cfg(feature = "emulated_mul128")]
pub(crate) const fn mul_128(x: u64, y: u64) -> (u64, u64) {
    mul_128_emulated(x, y)
}

/// Schoolbook 64x64 -> 128 bit product from four 32x32 -> 64 partial products.
///
/// `mid` collects the high half of `x0 * y0` and the low halves of both cross
/// terms, each below 2^32, so it stays below 3 * 2^32 and cannot overflow.
/// The high word cannot overflow because the full product is below 2^128.
#[inline(always)]
pub(crate) const fn mul_128_emulated(x: u64, y: u64) -> (u64, u64) {
    let x0 = x & 0xffff_ffff;
    let x1 = x >> 32;
    let y0 = y & 0xffff_ffff;
    let y1 = y >> 32;

    let p00 = x0 * y0;
    let p01 = x0 * y1;
    let p10 = x1 * y0;
    let p11 = x1 * y1;

    let mid = (p00 >> 32) + (p01 & 0xffff_ffff) + (p10 & 0xffff_ffff);
    let lo = (p00 & 0xffff_ffff) | (mid << 32);
    let hi = p11 + (p01 >> 32) + (p10 >> 32) + (mid >> 32);

    (hi, lo)
}
