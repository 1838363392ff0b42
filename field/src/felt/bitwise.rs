//! Bit-level operations. These act on the canonical integer, never on the
//! Montgomery limbs, and re-reduce their result modulo `p`.

use core::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

use super::Felt;

impl Felt {
    /// Minimal number of bits of the canonical value; zero for zero.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.to_canonical().bits()
    }

    /// Shifts the canonical value left, truncates to 256 bits, then reduces modulo `p`.
    pub fn shl(&self, n: usize) -> Self {
        Self::from_canonical(&self.to_canonical().shl(n))
    }

    /// Shifts the canonical value right. Shifts of 256 or more give zero.
    pub fn shr(&self, n: usize) -> Self {
        Self::from_canonical(&self.to_canonical().shr(n))
    }
}

macro_rules! impl_canonical_bitop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Felt {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_canonical(&(self.to_canonical() $op rhs.to_canonical()))
            }
        }
    };
}

impl_canonical_bitop!(BitAnd, bitand, &);
impl_canonical_bitop!(BitOr, bitor, |);
impl_canonical_bitop!(BitXor, bitxor, ^);

impl Shl<usize> for Felt {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: usize) -> Self {
        Felt::shl(&self, rhs)
    }
}

impl Shr<usize> for Felt {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: usize) -> Self {
        Felt::shr(&self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montgomery::MODULUS;
    use crate::uint::U256;

    #[test]
    fn logical_ops_use_canonical_values() {
        let a = Felt::from_u64(0b1100);
        let b = Felt::from_u64(0b1010);
        assert_eq!(a & b, Felt::from_u64(0b1000));
        assert_eq!(a | b, Felt::from_u64(0b1110));
        assert_eq!(a ^ b, Felt::from_u64(0b0110));
        assert_eq!(Felt::MAX & Felt::ONE, Felt::ZERO);
        assert_eq!(Felt::MAX ^ Felt::MAX, Felt::ZERO);
    }

    #[test]
    fn or_above_modulus_is_reduced() {
        // (p - 1) | 2^250 exceeds p.
        let high = Felt::ONE << 250;
        let expected = MODULUS.overflowing_sub(&U256::ONE).0 | U256::ONE.shl(250);
        assert!(expected > MODULUS);
        assert_eq!(
            (Felt::MAX | high).to_canonical(),
            expected.overflowing_sub(&MODULUS).0
        );
    }

    #[test]
    fn bit_length() {
        assert_eq!(Felt::ZERO.bits(), 0);
        assert_eq!(Felt::ONE.bits(), 1);
        assert_eq!(Felt::MAX.bits(), 252);
        for k in 0..251 {
            assert_eq!((Felt::ONE << k).bits(), k as u32 + 1);
        }
    }

    #[test]
    fn shifts() {
        let x = Felt::from_u64(0xabcd);
        assert_eq!(x << 4, Felt::from_u64(0xabcd0));
        assert_eq!(x >> 4, Felt::from_u64(0xabc));
        assert_eq!(x >> 16, Felt::ZERO);
        assert_eq!(x << 256, Felt::ZERO);
        assert_eq!(x >> 256, Felt::ZERO);
        assert_eq!(x << 0, x);
        // 2^255 mod p
        assert_eq!(Felt::ONE << 255, Felt::from_u64(2).pow_u64(255));
        // Bits pushed past 2^256 are dropped before reducing.
        assert_eq!(Felt::MAX << 10, Felt::from_canonical(&Felt::MAX.to_canonical().shl(10)));
        assert_eq!((Felt::ONE << 4).shr(4), Felt::ONE);
    }
}
