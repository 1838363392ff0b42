//! Fixed-width 256-bit unsigned integers stored as four little-endian `u64` limbs.
//!
//! This is the integer layer underneath [`crate::Felt`]: plain carry/borrow
//! propagating arithmetic with no modular reduction.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

use unroll::unroll_for_loops;

/// Number of 64-bit limbs in a [`U256`].
pub const NUM_LIMBS: usize = 4;

/// A 256-bit unsigned integer. `limbs[0]` is the least significant word.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    pub limbs: [u64; NUM_LIMBS],
}

/// Returns `a + b + carry` and the outgoing carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Returns `a - b - borrow` and the outgoing borrow (0 or 1).
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// Returns `acc + a * b + carry` and the high word.
#[inline(always)]
pub(crate) const fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (acc as u128) + (a as u128) * (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

impl U256 {
    pub const ZERO: Self = Self::from_limbs([0; NUM_LIMBS]);
    pub const ONE: Self = Self::from_limbs([1, 0, 0, 0]);
    pub const MAX: Self = Self::from_limbs([u64::MAX; NUM_LIMBS]);
    pub const BITS: u32 = 256;

    #[inline]
    pub const fn from_limbs(limbs: [u64; NUM_LIMBS]) -> Self {
        Self { limbs }
    }

    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self::from_limbs([value, 0, 0, 0])
    }

    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.limbs[0] == 0 && self.limbs[1] == 0 && self.limbs[2] == 0 && self.limbs[3] == 0
    }

    /// Ripple-carry addition. The flag is set when the sum does not fit in 256 bits.
    #[unroll_for_loops]
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0;
        for i in 0..4 {
            let (sum, c) = adc(self.limbs[i], rhs.limbs[i], carry);
            limbs[i] = sum;
            carry = c;
        }
        (Self::from_limbs(limbs), carry != 0)
    }

    /// Ripple-borrow subtraction. The flag is set when `self < rhs`.
    #[unroll_for_loops]
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut borrow = 0;
        for i in 0..4 {
            let (diff, b) = sbb(self.limbs[i], rhs.limbs[i], borrow);
            limbs[i] = diff;
            borrow = b;
        }
        (Self::from_limbs(limbs), borrow != 0)
    }

    /// Logical left shift. Bits moved past position 255 are dropped; `n >= 256` gives zero.
    pub fn shl(&self, n: usize) -> Self {
        if n >= Self::BITS as usize {
            return Self::ZERO;
        }
        let limb_shift = n / 64;
        let bit_shift = n % 64;
        let mut limbs = [0u64; NUM_LIMBS];
        for i in (limb_shift..NUM_LIMBS).rev() {
            let src = i - limb_shift;
            limbs[i] = self.limbs[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                limbs[i] |= self.limbs[src - 1] >> (64 - bit_shift);
            }
        }
        Self::from_limbs(limbs)
    }

    /// Logical right shift; `n >= 256` gives zero.
    pub fn shr(&self, n: usize) -> Self {
        if n >= Self::BITS as usize {
            return Self::ZERO;
        }
        let limb_shift = n / 64;
        let bit_shift = n % 64;
        let mut limbs = [0u64; NUM_LIMBS];
        for i in 0..NUM_LIMBS - limb_shift {
            let src = i + limb_shift;
            limbs[i] = self.limbs[src] >> bit_shift;
            if bit_shift != 0 && src + 1 < NUM_LIMBS {
                limbs[i] |= self.limbs[src + 1] << (64 - bit_shift);
            }
        }
        Self::from_limbs(limbs)
    }

    /// Minimal number of bits needed to represent the value; zero for zero.
    pub fn bits(&self) -> u32 {
        for i in (0..NUM_LIMBS).rev() {
            if self.limbs[i] != 0 {
                return 64 * i as u32 + (64 - self.limbs[i].leading_zeros());
            }
        }
        0
    }

    /// Whether bit `i` (counting from the least significant) is set.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        i < Self::BITS as usize && (self.limbs[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Divides by a single word, returning the quotient and remainder.
    /// Returns `None` when `divisor` is zero.
    pub fn div_rem_u64(&self, divisor: u64) -> Option<(Self, u64)> {
        if divisor == 0 {
            return None;
        }
        let mut quotient = [0u64; NUM_LIMBS];
        let mut rem = 0u128;
        for i in (0..NUM_LIMBS).rev() {
            let cur = (rem << 64) | self.limbs[i] as u128;
            quotient[i] = (cur / divisor as u128) as u64;
            rem = cur % divisor as u128;
        }
        Some((Self::from_limbs(quotient), rem as u64))
    }

    /// Binary long division. Returns `None` when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        if self < divisor {
            return Some((Self::ZERO, *self));
        }
        let mut quotient = Self::ZERO;
        let mut rem = Self::ZERO;
        for i in (0..self.bits() as usize).rev() {
            let carried = rem.bit(255);
            rem = rem.shl(1);
            if self.bit(i) {
                rem.limbs[0] |= 1;
            }
            if carried || rem >= *divisor {
                rem = rem.overflowing_sub(divisor).0;
                quotient.limbs[i / 64] |= 1 << (i % 64);
            }
        }
        Some((quotient, rem))
    }

    pub fn from_le_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        Self::from_limbs(limbs)
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut le = *bytes;
        le.reverse();
        Self::from_le_bytes(&le)
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = self.to_le_bytes();
        out.reverse();
        out
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..NUM_LIMBS).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Shl<usize> for U256 {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self {
        U256::shl(&self, rhs)
    }
}

impl Shr<usize> for U256 {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self {
        U256::shr(&self, rhs)
    }
}

macro_rules! impl_limbwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for U256 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let mut limbs = self.limbs;
                for (l, r) in limbs.iter_mut().zip(rhs.limbs) {
                    *l = *l $op r;
                }
                Self::from_limbs(limbs)
            }
        }
    };
}

impl_limbwise_op!(BitAnd, bitand, &);
impl_limbwise_op!(BitOr, bitor, |);
impl_limbwise_op!(BitXor, bitxor, ^);

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        let top = (0..NUM_LIMBS).rev().find(|&i| self.limbs[i] != 0);
        match top {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{:x}", self.limbs[top])?;
                for i in (0..top).rev() {
                    write!(f, "{:016x}", self.limbs[i])?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        let top = (0..NUM_LIMBS).rev().find(|&i| self.limbs[i] != 0);
        match top {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{:X}", self.limbs[top])?;
                for i in (0..top).rev() {
                    write!(f, "{:016X}", self.limbs[i])?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        // 10^19 is the largest power of ten that fits in a u64.
        const CHUNK: u64 = 10_000_000_000_000_000_000;
        let mut chunks = [0u64; 5];
        let mut len = 0;
        let mut value = *self;
        while !value.is_zero() {
            let Some((q, r)) = value.div_rem_u64(CHUNK) else {
                return Err(fmt::Error);
            };
            chunks[len] = r;
            len += 1;
            value = q;
        }
        write!(f, "{}", chunks[len - 1])?;
        for chunk in chunks[..len - 1].iter().rev() {
            write!(f, "{:019}", chunk)?;
        }
        Ok(())
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#x})", self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    fn u(limbs: [u64; 4]) -> U256 {
        U256::from_limbs(limbs)
    }

    #[test]
    fn add_carries_across_limbs() {
        let (sum, carry) = u([u64::MAX, u64::MAX, 0, 0]).overflowing_add(&U256::ONE);
        assert_eq!(sum, u([0, 0, 1, 0]));
        assert!(!carry);

        let (sum, carry) = U256::MAX.overflowing_add(&U256::ONE);
        assert_eq!(sum, U256::ZERO);
        assert!(carry);
    }

    #[test]
    fn sub_borrows_across_limbs() {
        let (diff, borrow) = u([0, 0, 1, 0]).overflowing_sub(&U256::ONE);
        assert_eq!(diff, u([u64::MAX, u64::MAX, 0, 0]));
        assert!(!borrow);

        let (diff, borrow) = U256::ZERO.overflowing_sub(&U256::ONE);
        assert_eq!(diff, U256::MAX);
        assert!(borrow);
    }

    #[test]
    fn shifts() {
        let one = U256::ONE;
        assert_eq!(one.shl(0), one);
        assert_eq!(one.shl(64), u([0, 1, 0, 0]));
        assert_eq!(one.shl(255), u([0, 0, 0, 1 << 63]));
        assert_eq!(one.shl(256), U256::ZERO);
        assert_eq!(one.shl(1000), U256::ZERO);
        assert_eq!(u([0, 0, 0, 1 << 63]).shr(255), one);
        assert_eq!(u([0, 0, 0, 1 << 63]).shl(1), U256::ZERO);
        assert_eq!(u([0x8000_0000_0000_0001, 0, 0, 0]).shl(1), u([2, 1, 0, 0]));
        assert_eq!(u([2, 1, 0, 0]).shr(1), u([0x8000_0000_0000_0001, 0, 0, 0]));
        assert_eq!(U256::MAX.shr(256), U256::ZERO);
        assert_eq!(U256::MAX.shr(200), u([(1 << 56) - 1, 0, 0, 0]));
    }

    #[test]
    fn compare_is_most_significant_first() {
        assert!(u([0, 0, 0, 1]) > u([u64::MAX, u64::MAX, u64::MAX, 0]));
        assert!(u([1, 0, 0, 0]) < u([0, 1, 0, 0]));
        assert_eq!(u([5, 6, 7, 8]).cmp(&u([5, 6, 7, 8])), Ordering::Equal);
    }

    #[test]
    fn bit_length() {
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::ONE.bits(), 1);
        assert_eq!(U256::MAX.bits(), 256);
        for k in 0..256 {
            assert_eq!(U256::ONE.shl(k).bits(), k as u32 + 1);
        }
    }

    #[test]
    fn long_division() {
        let (q, r) = U256::from_u64(100).div_rem(&U256::from_u64(7)).unwrap();
        assert_eq!((q, r), (U256::from_u64(14), U256::from_u64(2)));

        let (q, r) = U256::MAX.div_rem(&U256::MAX).unwrap();
        assert_eq!((q, r), (U256::ONE, U256::ZERO));

        let (q, r) = U256::MAX.div_rem(&u([0, 1, 0, 0])).unwrap();
        assert_eq!(q, u([u64::MAX, u64::MAX, u64::MAX, 0]));
        assert_eq!(r, u([u64::MAX, 0, 0, 0]));

        assert!(U256::ONE.div_rem(&U256::ZERO).is_none());
    }

    #[test]
    fn word_division() {
        let (q, r) = U256::MAX.div_rem_u64(10).unwrap();
        assert_eq!(r, 5);
        assert_eq!(q.div_rem_u64(1).unwrap(), (q, 0));
        assert_eq!(U256::from_u64(100).div_rem_u64(7), Some((U256::from_u64(14), 2)));
        assert!(U256::MAX.div_rem_u64(0).is_none());
    }

    #[test]
    fn bytes_roundtrip_orders() {
        let value = u([0x0706050403020100, 0x0f0e0d0c0b0a0908, 0x1716151413121110, 0x1f1e1d1c1b1a1918]);
        let le = value.to_le_bytes();
        assert_eq!(le[0], 0x00);
        assert_eq!(le[31], 0x1f);
        let be = value.to_be_bytes();
        assert_eq!(be[0], 0x1f);
        assert_eq!(U256::from_le_bytes(&le), value);
        assert_eq!(U256::from_be_bytes(&be), value);
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", U256::ZERO), "0");
        assert_eq!(format!("{:#x}", U256::ZERO), "0x0");
        assert_eq!(format!("{:x}", u([1, 1, 0, 0])), "10000000000000001");
        assert_eq!(
            format!("{}", U256::MAX),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(format!("{}", U256::from_u64(10_000_000_000_000_000_000)), "10000000000000000000");
    }
}
