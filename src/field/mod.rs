pub mod arithmetic;
pub mod inversion;
pub mod mersenne61;
pub mod traits;

pub use self::arithmetic::*;
pub use self::inversion::inverse;
pub use self::mersenne61::Mersenne61Field;
pub use self::traits::field::*;

/// p = 2^61 - 1
pub const PRIME: u64 = (1u64 << 61) - 1;

/// Mask where bit #63 is clear and all other bits are set.
pub const MASK63: u64 = (1u64 << 63) - 1;

/// Field value that stands in for the two raw 61-bit patterns `p - 1` and `p`
/// when arbitrary bytes are packed into field elements.
pub const AMBIGUITY: u64 = PRIME - 1;

/// The single partially reduced input that `finalize` does not handle.
pub const FINALIZE_EXCLUDED: u64 = 0x3ffffffffffffffe;

pub fn rand_from_rng<R: rand::Rng>(rng: &mut R) -> Mersenne61Field {
    Mersenne61Field::from_u64_unchecked(rng.gen_range(0..PRIME))
}
