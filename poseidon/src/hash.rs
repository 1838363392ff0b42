//! Starknet's Poseidon sponge: rate 2, capacity 1, output `s[0]`.

use core::iter::once;

use felt252_field::Felt;
use itertools::Itertools;

use crate::params::SPONGE_WIDTH;
use crate::permutation::poseidon_permute_comp;

/// Hashes two elements; the capacity element is set to `2`.
pub fn poseidon_hash(x: Felt, y: Felt) -> Felt {
    let mut state = [x, y, Felt::TWO];
    poseidon_permute_comp(&mut state);
    state[0]
}

/// Hashes one element; the capacity element is set to `1`.
pub fn poseidon_hash_single(x: Felt) -> Felt {
    let mut state = [x, Felt::ZERO, Felt::ONE];
    poseidon_permute_comp(&mut state);
    state[0]
}

/// Hashes an arbitrary number of elements.
///
/// The input is padded with a `1` and then, if needed, a `0` to an even length,
/// and absorbed two elements per permutation.
pub fn poseidon_hash_many(inputs: &[Felt]) -> Felt {
    let padded_len = (inputs.len() + 2) & !1;
    let mut state = [Felt::ZERO; SPONGE_WIDTH];
    for (a, b) in inputs
        .iter()
        .copied()
        .chain(once(Felt::ONE))
        .pad_using(padded_len, |_| Felt::ZERO)
        .tuples()
    {
        state[0] += a;
        state[1] += b;
        poseidon_permute_comp(&mut state);
    }
    state[0]
}

/// Incremental form of [`poseidon_hash_many`].
#[derive(Copy, Clone, Debug, Default)]
pub struct PoseidonHasher {
    state: [Felt; SPONGE_WIDTH],
    pending: Option<Felt>,
}

impl PoseidonHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs one element.
    pub fn update(&mut self, value: Felt) {
        match self.pending.take() {
            Some(previous) => {
                self.state[0] += previous;
                self.state[1] += value;
                poseidon_permute_comp(&mut self.state);
            }
            None => self.pending = Some(value),
        }
    }

    /// Pads, absorbs the final block and returns the digest.
    pub fn finalize(mut self) -> Felt {
        match self.pending.take() {
            Some(last) => {
                self.state[0] += last;
                self.state[1] += Felt::ONE;
            }
            None => self.state[0] += Felt::ONE,
        }
        poseidon_permute_comp(&mut self.state);
        self.state[0]
    }
}

impl Extend<Felt> for PoseidonHasher {
    fn extend<I: IntoIterator<Item = Felt>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}
