// Small note on function signatures: field elements here are a single word,
// so the "_assign" methods take `&Self` and return `&mut Self` for chaining,
// and the by-value forms come from `impl_std_ops_for_field!`.

pub trait Field:
    'static
    + Clone
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
    + std::hash::Hash
    + std::cmp::PartialEq
    + std::cmp::Eq
    + std::marker::Send
    + std::marker::Sync
    + std::default::Default
{
    // identities
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MINUS_ONE: Self;
    // zero check
    fn is_zero(&self) -> bool;
    // add
    fn add_assign(&'_ mut self, other: &Self) -> &'_ mut Self;
    // sub
    fn sub_assign(&'_ mut self, other: &Self) -> &'_ mut Self;
    // mul
    fn mul_assign(&'_ mut self, other: &Self) -> &'_ mut Self;
    // square
    fn square(&'_ mut self) -> &'_ mut Self;
    // negate
    fn negate(&'_ mut self) -> &'_ mut Self;
    // double
    fn double(&'_ mut self) -> &'_ mut Self;
    // exponentiate for short exponent
    fn pow_u64(&self, power: u64) -> Self {
        let mut current = *self;
        let mut product = Self::ONE;

        let num_bits = crate::utils::num_bits_u64(power);
        for j in 0..num_bits {
            if (power >> j & 1) != 0 {
                product.mul_assign(&current);
            }
            current.square();
        }

        product
    }

    #[inline(always)]
    fn mul_and_accumulate_into(acc: &mut Self, a: &Self, b: &Self) {
        let mut tmp = *a;
        tmp.mul_assign(b);
        acc.add_assign(&tmp);
    }

    fn from_u64_with_reduction(value: u64) -> Self;
}

use derivative::Derivative;

#[derive(Derivative)]
#[derivative(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(isize)]
pub enum LegendreSymbol {
    Zero = 0,
    QuadraticResidue = 1,
    QuadraticNonResidue = -1,
}

pub trait PrimeField: Field {
    const CHAR: u64;
    const CHAR_BITS: usize;
    fn inverse(&self) -> Option<Self>;
    fn legendre(&self) -> LegendreSymbol {
        // s = self^((modulus - 1) // 2)
        let s = self.pow_u64((Self::CHAR - 1) / 2);
        if s == Self::ZERO {
            LegendreSymbol::Zero
        } else if s == Self::ONE {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }
}

pub trait SqrtField: Field {
    fn sqrt(&self) -> Option<Self>;
}

// std operator overloads on top of the `Field` methods
#[macro_export]
macro_rules! impl_std_ops_for_field {
    { $type_name:tt } => {
        impl std::ops::Add<$type_name> for $type_name {
            type Output = Self;

            // note that we do not put "mut self" here or anywhere!
            #[inline(always)]
            fn add(self, rhs: $type_name) -> Self::Output {
                let mut this = self;
                <Self as $crate::field::Field>::add_assign(&mut this, &rhs);

                this
            }
        }

        impl std::ops::AddAssign<$type_name> for $type_name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: $type_name) {
                <Self as $crate::field::Field>::add_assign(self, &rhs);
            }
        }

        impl std::ops::Sub<$type_name> for $type_name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: $type_name) -> Self::Output {
                let mut this = self;
                <Self as $crate::field::Field>::sub_assign(&mut this, &rhs);

                this
            }
        }

        impl std::ops::SubAssign<$type_name> for $type_name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: $type_name) {
                <Self as $crate::field::Field>::sub_assign(self, &rhs);
            }
        }

        impl std::ops::Mul<$type_name> for $type_name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: $type_name) -> Self::Output {
                let mut this = self;
                <Self as $crate::field::Field>::mul_assign(&mut this, &rhs);

                this
            }
        }

        impl std::ops::MulAssign<$type_name> for $type_name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $type_name) {
                <Self as $crate::field::Field>::mul_assign(self, &rhs);
            }
        }

        impl std::ops::Neg for $type_name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                let mut this = self;
                <Self as $crate::field::Field>::negate(&mut this);

                this
            }
        }
    }
}
