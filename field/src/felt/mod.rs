//! The Stark field element.

mod arith;
mod bitwise;
mod convert;
mod serialization;

pub use convert::FELT_BYTES;

use core::cmp::Ordering;

use crate::montgomery::{self, MODULUS};
use crate::uint::U256;

/// An element of the prime field of order `p = 2^251 + 17 * 2^192 + 1`.
///
/// The limbs hold the Montgomery form `x * 2^256 mod p` of the canonical value `x`.
/// Every constructor and operation keeps the stored value below `p`, so two
/// elements are equal exactly when their limbs are equal. Ordering, bitwise
/// operations, shifts and all external encodings act on the canonical value.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Felt(U256);

impl Felt {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const ONE: Self = Self(montgomery::R);
    pub const TWO: Self = Self(U256::from_limbs([
        0xffffffffffffffc1,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x07fffffffffffbd0,
    ]));
    /// `p - 1`.
    pub const MAX: Self = Self(U256::from_limbs([
        0x0000000000000020,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000220,
    ]));

    /// Number of bits in the canonical representation of the modulus.
    pub const BITS: u32 = 252;

    /// `p - 1 = 2^TWO_ADICITY * q` with `q` odd.
    pub const TWO_ADICITY: usize = 192;

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// The field modulus as an integer.
    #[inline]
    pub const fn modulus() -> U256 {
        MODULUS
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self(montgomery::to_montgomery(&U256::from_u64(value)))
    }

    #[inline]
    pub fn from_u128(value: u128) -> Self {
        Self(montgomery::to_montgomery(&U256::from_u128(value)))
    }

    /// Builds an element from any 256-bit integer, reducing it modulo `p`.
    #[inline]
    pub fn from_canonical(value: &U256) -> Self {
        Self(montgomery::to_montgomery(value))
    }

    /// The canonical integer in `[0, p)`.
    #[inline]
    pub fn to_canonical(&self) -> U256 {
        montgomery::from_montgomery(&self.0)
    }

    /// Wraps limbs that are already in Montgomery form, reducing them below `p`.
    ///
    /// For libraries that exchange Montgomery limbs directly; canonical limbs go
    /// through [`Felt::from_canonical`].
    pub fn from_raw_montgomery(limbs: [u64; 4]) -> Self {
        let mut value = U256::from_limbs(limbs);
        while value >= MODULUS {
            value = value.overflowing_sub(&MODULUS).0;
        }
        Self(value)
    }

    /// The Montgomery-form limbs, least significant first.
    #[inline]
    pub const fn to_raw_montgomery(&self) -> [u64; 4] {
        self.0.limbs
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Compares canonical values.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Ord for Felt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_canonical().cmp(&other.to_canonical())
    }
}

impl PartialOrd for Felt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
