use felt252_field::Felt;

use crate::error::PoseidonError;
use crate::params::{HadesParams, StarkHades, SPONGE_WIDTH};

#[inline(always)]
fn constant_layer<const WIDTH: usize>(state: &mut [Felt; WIDTH], round_constants: &[Felt; WIDTH]) {
    for (s, c) in state.iter_mut().zip(round_constants) {
        *s += *c;
    }
}

#[inline]
fn full_rounds<P, const WIDTH: usize>(state: &mut [Felt; WIDTH], round_ctr: &mut usize)
where
    P: HadesParams<WIDTH>,
{
    let round_constants = P::round_constants();
    for _ in 0..P::N_FULL_ROUNDS / 2 {
        constant_layer(state, &round_constants[*round_ctr]);
        for s in state.iter_mut() {
            *s = P::sbox(*s);
        }
        P::mix_layer(state);
        *round_ctr += 1;
    }
}

#[inline]
fn partial_rounds<P, const WIDTH: usize>(state: &mut [Felt; WIDTH], round_ctr: &mut usize)
where
    P: HadesParams<WIDTH>,
{
    let round_constants = P::round_constants();
    for _ in 0..P::N_PARTIAL_ROUNDS {
        constant_layer(state, &round_constants[*round_ctr]);
        state[P::PARTIAL_SBOX_INDEX] = P::sbox(state[P::PARTIAL_SBOX_INDEX]);
        P::mix_layer(state);
        *round_ctr += 1;
    }
}

/// Applies the Hades permutation described by `P` to `state` in place.
///
/// Rejected at compile time: `P::PARTIAL_SBOX_INDEX >= WIDTH` or an odd number of
/// full rounds.
///
/// # Panics
///
/// If `P::round_constants()` does not hold exactly `P::N_ROUNDS` rows.
pub fn permute<P, const WIDTH: usize>(state: &mut [Felt; WIDTH])
where
    P: HadesParams<WIDTH>,
{
    const {
        assert!(P::PARTIAL_SBOX_INDEX < WIDTH, "partial S-box index out of range");
        assert!(P::N_FULL_ROUNDS % 2 == 0, "full rounds must split evenly");
    }
    assert_eq!(
        P::round_constants().len(),
        P::N_ROUNDS,
        "round constant table length must match the round count"
    );

    let mut round_ctr = 0;
    full_rounds::<P, WIDTH>(state, &mut round_ctr);
    partial_rounds::<P, WIDTH>(state, &mut round_ctr);
    full_rounds::<P, WIDTH>(state, &mut round_ctr);
    debug_assert_eq!(round_ctr, P::N_ROUNDS);
}

/// The Starknet Poseidon permutation on a width-3 state.
#[inline]
pub fn poseidon_permute_comp(state: &mut [Felt; SPONGE_WIDTH]) {
    permute::<StarkHades, SPONGE_WIDTH>(state)
}

/// [`poseidon_permute_comp`] for states whose width is only known at runtime.
pub fn poseidon_permute(state: &mut [Felt]) -> Result<(), PoseidonError> {
    let actual = state.len();
    let state: &mut [Felt; SPONGE_WIDTH] = state.try_into().map_err(|_| PoseidonError::Shape {
        expected: SPONGE_WIDTH,
        actual,
    })?;
    poseidon_permute_comp(state);
    Ok(())
}
