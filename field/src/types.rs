use alloc::vec::Vec;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::montgomery::MODULUS;
use crate::{Felt, U256};

/// Sampling
pub trait Sample: Sized {
    /// Samples a single value using `rng`.
    fn sample<R>(rng: &mut R) -> Self
    where
        R: RngCore + ?Sized;

    /// Samples a single value using the [`OsRng`].
    #[inline]
    fn rand() -> Self {
        Self::sample(&mut OsRng)
    }

    /// Samples a [`Vec`] of values of length `n` using [`OsRng`].
    #[inline]
    fn rand_vec(n: usize) -> Vec<Self> {
        (0..n).map(|_| Self::rand()).collect()
    }

    /// Samples an array of values of length `N` using [`OsRng`].
    #[inline]
    fn rand_array<const N: usize>() -> [Self; N] {
        core::array::from_fn(|_| Self::rand())
    }
}

impl Sample for Felt {
    /// Uniform over `[0, p)` by rejection on 252-bit candidates.
    fn sample<R>(rng: &mut R) -> Self
    where
        R: RngCore + ?Sized,
    {
        let top_mask = (1u64 << (Felt::BITS - 192)) - 1;
        loop {
            let mut limbs = [0u64; 4];
            for limb in limbs.iter_mut() {
                *limb = rng.next_u64();
            }
            limbs[3] &= top_mask;
            let candidate = U256::from_limbs(limbs);
            if candidate < MODULUS {
                return Felt::from_canonical(&candidate);
            }
        }
    }
}
