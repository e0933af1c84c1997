use std::hash::{Hash, Hasher};

use super::{
    add4, finalize, inverse, multiply, negate, partial_reduce, Field, PrimeField, SqrtField,
    PRIME,
};

/// The prime field `F_p` where `p = 2^61 - 1`.
///
/// The wrapped value is always canonical (< p). Use the free functions in
/// `field::arithmetic` directly when lazy reduction across many operations
/// is wanted; this type finalizes after every operation.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Mersenne61Field(u64);

// Values coming off the wire are reduced so the canonical invariant holds
impl<'de> serde::Deserialize<'de> for Mersenne61Field {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <u64 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_u64_with_reduction(value))
    }
}

// To allow wire format equality, we normalize on serialization
impl serde::Serialize for Mersenne61Field {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.as_u64_reduced())
    }
}

impl Mersenne61Field {
    pub const ORDER: u64 = PRIME;
    pub const ORDER_BITS: usize = 61;
    // p = 3 (mod 4), so square roots are a single exponentiation
    const SQRT_EXPONENT: u64 = (PRIME + 1) / 4;

    #[inline(always)]
    pub const fn from_u64_with_reduction(x: u64) -> Self {
        Self(finalize(partial_reduce(x)))
    }

    #[inline(always)]
    pub const fn from_u64(value: u64) -> Option<Self> {
        if value >= Self::ORDER {
            None
        } else {
            Some(Self(value))
        }
    }

    #[inline(always)]
    pub const fn from_u64_unchecked(value: u64) -> Self {
        debug_assert!(value < Self::ORDER);
        Self(value)
    }

    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn as_u64_reduced(&self) -> u64 {
        debug_assert!(self.0 < Self::ORDER);
        self.0
    }

    pub fn inverse(&self) -> Option<Self> {
        match inverse(self.0) {
            0 => None,
            inv => Some(Self(inv)),
        }
    }
}

impl PartialEq for Mersenne61Field {
    fn eq(&self, other: &Self) -> bool {
        self.as_u64_reduced() == other.as_u64_reduced()
    }
}

impl PartialEq<u64> for Mersenne61Field {
    fn eq(&self, other: &u64) -> bool {
        self.as_u64_reduced() == *other
    }
}

impl Eq for Mersenne61Field {}

impl Hash for Mersenne61Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.as_u64_reduced())
    }
}

impl Ord for Mersenne61Field {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u64_reduced().cmp(&other.as_u64_reduced())
    }
}

impl PartialOrd for Mersenne61Field {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Mersenne61Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:016x}", self.as_u64_reduced())
    }
}

impl std::fmt::Debug for Mersenne61Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:016x}", self.as_u64_reduced())
    }
}

impl Field for Mersenne61Field {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1);
    const TWO: Self = Self(2);
    const MINUS_ONE: Self = Self(PRIME - 1);

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.as_u64_reduced() == 0
    }

    #[inline(always)]
    fn add_assign(&'_ mut self, other: &Self) -> &'_ mut Self {
        self.0 = finalize(add4(self.0, other.0, 0, 0));

        self
    }

    #[inline(always)]
    fn sub_assign(&'_ mut self, other: &Self) -> &'_ mut Self {
        let neg = negate(other.as_u64_reduced());
        self.0 = finalize(add4(self.0, neg, 0, 0));

        self
    }

    #[inline(always)]
    fn mul_assign(&'_ mut self, other: &Self) -> &'_ mut Self {
        self.0 = finalize(multiply(self.0, other.0));

        self
    }

    #[inline(always)]
    fn square(&'_ mut self) -> &'_ mut Self {
        self.0 = finalize(multiply(self.0, self.0));

        self
    }

    #[inline(always)]
    fn negate(&'_ mut self) -> &'_ mut Self {
        // negate(0) = p, which finalizes back to 0
        self.0 = finalize(negate(self.as_u64_reduced()));

        self
    }

    #[inline(always)]
    fn double(&'_ mut self) -> &'_ mut Self {
        self.0 = finalize(add4(self.0, self.0, 0, 0));

        self
    }

    #[inline(always)]
    fn from_u64_with_reduction(value: u64) -> Self {
        Self::from_u64_with_reduction(value)
    }
}

impl PrimeField for Mersenne61Field {
    const CHAR: u64 = PRIME;
    const CHAR_BITS: usize = Self::ORDER_BITS;

    fn inverse(&self) -> Option<Self> {
        Self::inverse(self)
    }
}

impl SqrtField for Mersenne61Field {
    fn sqrt(&self) -> Option<Self> {
        let root = self.pow_u64(Self::SQRT_EXPONENT);
        let mut check = root;
        check.square();
        if check == *self {
            Some(root)
        } else {
            None
        }
    }
}

crate::impl_std_ops_for_field!(Mersenne61Field);

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::{rand_from_rng, LegendreSymbol};
    use rand::SeedableRng;

    type F = Mersenne61Field;

    fn f(x: u64) -> F {
        F::from_u64(x).unwrap()
    }

    #[test]
    fn basic_properties() {
        assert_eq!(F::ZERO, f(0));
        assert_eq!(F::ONE, f(1));
        assert_eq!(F::TWO, f(2));
        assert_eq!(F::MINUS_ONE, f(F::ORDER - 1));
        assert!(F::from_u64(F::ORDER).is_none());
        assert_eq!(F::from_u64_with_reduction(F::ORDER), F::ZERO);
        assert_eq!(F::from_u64_with_reduction(u64::MAX), f(u64::MAX % F::ORDER));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(f(F::ORDER - 2) + f(10), f(8));
        assert_eq!(F::MINUS_ONE + F::ONE, F::ZERO);
        assert_eq!(f(2) - f(10), f(F::ORDER - 8));
        assert_eq!(F::ZERO - F::MINUS_ONE, F::ONE);
        assert_eq!(f(10) - f(10), F::ZERO);

        let mut a = f(F::ORDER - 1);
        a.double();
        assert_eq!(a, f(F::ORDER - 2));
    }

    #[test]
    fn test_mul() {
        assert_eq!(f(123) * f(456), f(56088));
        assert_eq!(F::MINUS_ONE * F::MINUS_ONE, F::ONE);
        assert_eq!(f(F::ORDER - 1) * f(2), f(F::ORDER - 2));
        assert_eq!(f(12345) * F::ZERO, F::ZERO);

        let mut a = f(7);
        a.square();
        assert_eq!(a, 49u64);
    }

    #[test]
    fn test_negate() {
        assert_eq!(-F::ZERO, F::ZERO);
        assert_eq!(-f(5), f(F::ORDER - 5));
        assert_eq!(-F::MINUS_ONE, F::ONE);
        assert_eq!(-(-f(12345)), f(12345));
    }

    #[test]
    fn test_inverse() {
        assert!(F::ZERO.inverse().is_none());
        assert_eq!(F::ONE.inverse().unwrap(), F::ONE);

        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let a: F = rand_from_rng(&mut rng);
            if a.is_zero() {
                continue;
            }
            let inv = a.inverse().unwrap();
            assert_eq!(a * inv, F::ONE);
            assert_eq!(inv.inverse().unwrap(), a);
        }
    }

    #[test]
    fn test_pow_and_fermat() {
        let a = f(3);
        assert_eq!(a.pow_u64(0), F::ONE);
        assert_eq!(a.pow_u64(5), f(243));
        assert_eq!(a.pow_u64(F::ORDER - 1), F::ONE);
        assert_eq!(a.pow_u64(F::ORDER - 2), a.inverse().unwrap());
    }

    #[test]
    fn test_sqrt_and_legendre() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let a: F = rand_from_rng(&mut rng);
            let mut sq = a;
            sq.square();
            let root = sq.sqrt().unwrap();
            assert!(root == a || root == -a);
            if !a.is_zero() {
                assert_eq!(sq.legendre(), LegendreSymbol::QuadraticResidue);
            }
        }
        // -1 is a non-residue since p = 3 (mod 4)
        assert!(F::MINUS_ONE.sqrt().is_none());
        assert_eq!(F::MINUS_ONE.legendre(), LegendreSymbol::QuadraticNonResidue);
        assert_eq!(F::ZERO.legendre(), LegendreSymbol::Zero);
    }

    #[test]
    fn test_mul_and_accumulate() {
        let mut acc = f(1);
        F::mul_and_accumulate_into(&mut acc, &f(2), &f(3));
        assert_eq!(acc, f(7));
    }

    #[test]
    fn serialization_is_normalized() {
        let a = f(F::ORDER - 1);
        let encoded = serde_json::to_string(&a).unwrap();
        assert_eq!(encoded, (F::ORDER - 1).to_string());

        // a non-canonical value on the wire is reduced when read
        let raw: F = serde_json::from_str(&F::ORDER.to_string()).unwrap();
        assert_eq!(raw, F::ZERO);
        assert_eq!(serde_json::to_string(&raw).unwrap(), "0");
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", f(255)), "0x00000000000000ff");
        assert_eq!(format!("{:?}", F::MINUS_ONE), "0x1ffffffffffffffe");
    }
}
