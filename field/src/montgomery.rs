//! Montgomery arithmetic modulo the Stark prime `p = 2^251 + 17 * 2^192 + 1`.
//!
//! Values are kept as `x * R mod p` with `R = 2^256`. Multiplication uses the
//! coarsely integrated operand scanning (CIOS) variant of REDC, which never
//! materializes the 512-bit product.

use static_assertions::const_assert;
use unroll::unroll_for_loops;

use crate::uint::{adc, mac, U256};

/// The field modulus.
pub const MODULUS: U256 = U256::from_limbs([
    0x0000000000000001,
    0x0000000000000000,
    0x0000000000000000,
    0x0800000000000011,
]);

/// `R mod p`, i.e. one in Montgomery form.
pub const R: U256 = U256::from_limbs([
    0xffffffffffffffe1,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x07fffffffffffdf0,
]);

/// `R^2 mod p`, used to move values into Montgomery form.
pub const R2: U256 = U256::from_limbs([
    0xfffffd737e000401,
    0x00000001330fffff,
    0xffffffffff6f8000,
    0x07ffd4ab5e008810,
]);

/// `-p^{-1} mod 2^64`. The low limb of `p` is one, so this is `-1`.
pub const INV: u64 = 0xffffffffffffffff;

// Intermediate sums in `mont_mul` stay below `2p`; this needs the top bit of the
// modulus to be clear.
const_assert!(MODULUS.limbs[3] < (1 << 62));
const_assert!(MODULUS.limbs[0].wrapping_mul(INV) == u64::MAX);

/// Computes `a * b * R^{-1} mod p`.
///
/// Inputs must satisfy `a * b < p * R`; in particular any `a < 2^256` with `b < p`
/// is accepted, which is how [`to_montgomery`] reduces arbitrary 256-bit values.
#[unroll_for_loops]
#[inline]
pub fn mont_mul(a: &U256, b: &U256) -> U256 {
    let a = &a.limbs;
    let b = &b.limbs;
    let p = &MODULUS.limbs;
    let mut t = [0u64; 6];

    for i in 0..4 {
        let mut carry = 0;
        for j in 0..4 {
            let (lo, hi) = mac(t[j], a[j], b[i], carry);
            t[j] = lo;
            carry = hi;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[4] = lo;
        t[5] = hi;

        let m = t[0].wrapping_mul(INV);
        let (_, mut carry) = mac(t[0], m, p[0], 0);
        for j in 1..4 {
            let (lo, hi) = mac(t[j], m, p[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[3] = lo;
        t[4] = t[5] + hi;
    }

    reduce_once(U256::from_limbs([t[0], t[1], t[2], t[3]]), t[4] != 0)
}

/// Subtracts the modulus once if `value` (plus an overflow word) is not below it.
#[inline(always)]
fn reduce_once(value: U256, overflow: bool) -> U256 {
    if overflow || value >= MODULUS {
        value.overflowing_sub(&MODULUS).0
    } else {
        value
    }
}

/// Maps a canonical integer to Montgomery form, reducing it modulo `p` on the way.
#[inline]
pub fn to_montgomery(x: &U256) -> U256 {
    mont_mul(x, &R2)
}

/// Maps a Montgomery value back to its canonical integer in `[0, p)`.
#[inline]
pub fn from_montgomery(x: &U256) -> U256 {
    mont_mul(x, &U256::ONE)
}

#[inline]
pub fn add_mod(a: &U256, b: &U256) -> U256 {
    let (sum, carry) = a.overflowing_add(b);
    reduce_once(sum, carry)
}

#[inline]
pub fn sub_mod(a: &U256, b: &U256) -> U256 {
    let (diff, borrow) = a.overflowing_sub(b);
    if borrow {
        diff.overflowing_add(&MODULUS).0
    } else {
        diff
    }
}

#[inline]
pub fn neg_mod(a: &U256) -> U256 {
    if a.is_zero() {
        U256::ZERO
    } else {
        MODULUS.overflowing_sub(a).0
    }
}

#[cfg(test)]
mod tests {
    use num::BigUint;

    use super::*;

    fn big(x: &U256) -> BigUint {
        BigUint::from_bytes_le(&x.to_le_bytes())
    }

    fn modulus() -> BigUint {
        big(&MODULUS)
    }

    #[test]
    fn constants_are_consistent() {
        let p = modulus();
        let r = BigUint::from(1u8) << 256u32;
        assert_eq!(p, (BigUint::from(1u8) << 251u32) + (BigUint::from(17u8) << 192u32) + 1u8);
        assert_eq!(big(&R), &r % &p);
        assert_eq!(big(&R2), (&r * &r) % &p);
        assert_eq!(from_montgomery(&R), U256::ONE);
    }

    #[test]
    fn mont_mul_matches_oracle() {
        let p = modulus();
        let r_inv = (BigUint::from(1u8) << 256u32).modpow(&(&p - 2u8), &p);
        let samples = [
            U256::ZERO,
            U256::ONE,
            U256::from_u64(u64::MAX),
            U256::from_limbs([u64::MAX, u64::MAX, 0, 0]),
            MODULUS.overflowing_sub(&U256::ONE).0,
            R,
            R2,
        ];
        for a in &samples {
            for b in &samples {
                let expected = big(a) * big(b) * &r_inv % &p;
                assert_eq!(big(&mont_mul(a, b)), expected);
            }
        }
    }

    #[test]
    fn to_montgomery_reduces_full_width_inputs() {
        let p = modulus();
        for x in [U256::MAX, MODULUS, MODULUS.shl(4), U256::ONE.shl(255)] {
            assert_eq!(big(&from_montgomery(&to_montgomery(&x))), big(&x) % &p);
        }
    }

    #[test]
    fn add_sub_wrap_at_modulus() {
        let max = MODULUS.overflowing_sub(&U256::ONE).0;
        assert_eq!(add_mod(&max, &U256::ONE), U256::ZERO);
        assert_eq!(sub_mod(&U256::ZERO, &U256::ONE), max);
        assert_eq!(neg_mod(&U256::ZERO), U256::ZERO);
        assert_eq!(neg_mod(&U256::ONE), max);
    }
}
