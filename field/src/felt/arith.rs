use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Felt;
use crate::error::FeltError;
use crate::montgomery;
use crate::uint::U256;

/// `p - 2`, the Fermat inversion exponent.
const INVERSION_EXPONENT: U256 = U256::from_limbs([
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x0800000000000010,
]);

/// `(p - 1) / 2`, the Euler criterion exponent.
const LEGENDRE_EXPONENT: U256 = U256::from_limbs([
    0x0000000000000000,
    0x0000000000000000,
    0x8000000000000000,
    0x0400000000000008,
]);

/// The odd part `q` of `p - 1`.
const ODD_FACTOR: U256 = U256::from_limbs([0x0800000000000011, 0, 0, 0]);

/// `(q + 1) / 2`.
const ODD_FACTOR_PLUS_ONE_HALF: U256 = U256::from_limbs([0x0400000000000009, 0, 0, 0]);

/// `3^q`, a primitive `2^192`-th root of unity (3 generates the multiplicative group).
const TWO_ADIC_ROOT_OF_UNITY: U256 = U256::from_limbs([
    0x6070024f42f8ef94,
    0xad187148e11a6161,
    0x3f0464519c8b0fa5,
    0x005282db87529cfa,
]);

impl Felt {
    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Raises to the canonical value of `exponent`. `0^0` is one.
    #[inline]
    pub fn pow(&self, exponent: &Felt) -> Self {
        self.pow_u256(&exponent.to_canonical())
    }

    /// Raises to a machine-word exponent. `0^0` is one.
    pub fn pow_u64(&self, exponent: u64) -> Self {
        self.pow_u256(&U256::from_u64(exponent))
    }

    /// Left-to-right square-and-multiply over a public exponent.
    pub fn pow_u256(&self, exponent: &U256) -> Self {
        let mut result = Self::ONE;
        for i in (0..exponent.bits() as usize).rev() {
            result = result.square();
            if exponent.bit(i) {
                result *= *self;
            }
        }
        result
    }

    /// Squares `self` `n` times.
    fn exp_power_of_2(&self, n: usize) -> Self {
        let mut result = *self;
        for _ in 0..n {
            result = result.square();
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem.
    pub fn inverse(&self) -> Result<Self, FeltError> {
        if self.is_zero() {
            return Err(FeltError::DivisionByZero);
        }
        Ok(self.pow_u256(&INVERSION_EXPONENT))
    }

    /// Field division `self * rhs^{-1}`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, FeltError> {
        Ok(*self * rhs.inverse()?)
    }

    /// Integer quotient and remainder of the canonical values.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), FeltError> {
        let (quotient, remainder) = self
            .to_canonical()
            .div_rem(&rhs.to_canonical())
            .ok_or(FeltError::DivisionByZero)?;
        Ok((
            Self::from_canonical(&quotient),
            Self::from_canonical(&remainder),
        ))
    }

    /// Whether `self` is a square in the field (zero counts as one).
    pub fn is_quadratic_residue(&self) -> bool {
        self.is_zero() || self.pow_u256(&LEGENDRE_EXPONENT).is_one()
    }

    /// Square root by Tonelli-Shanks. Of the two roots, the one with the smaller
    /// canonical value is returned; `None` for non-residues.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        if !self.is_quadratic_residue() {
            return None;
        }

        let mut m = Self::TWO_ADICITY;
        let mut c = Self::from_canonical(&TWO_ADIC_ROOT_OF_UNITY);
        let mut t = self.pow_u256(&ODD_FACTOR);
        let mut root = self.pow_u256(&ODD_FACTOR_PLUS_ONE_HALF);

        while !t.is_one() {
            // Least i with t^(2^i) = 1; it exists and is below m since t is a residue.
            let mut i = 1;
            let mut t2i = t.square();
            while !t2i.is_one() {
                t2i = t2i.square();
                i += 1;
            }
            let b = c.exp_power_of_2(m - i - 1);
            m = i;
            c = b.square();
            t *= c;
            root *= b;
        }

        let other = -root;
        Some(if other < root { other } else { root })
    }
}

impl Add for Felt {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(montgomery::add_mod(&self.0, &rhs.0))
    }
}

impl Sub for Felt {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(montgomery::sub_mod(&self.0, &rhs.0))
    }
}

impl Mul for Felt {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(montgomery::mont_mul(&self.0, &rhs.0))
    }
}

impl Neg for Felt {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(montgomery::neg_mod(&self.0))
    }
}

impl AddAssign for Felt {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Felt {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Felt {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Felt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Felt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
