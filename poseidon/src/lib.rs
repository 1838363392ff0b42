//! The Hades permutation and the Poseidon sponge used by Starknet, over
//! [`felt252_field::Felt`].

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod hash;
pub mod params;
pub mod permutation;

pub use error::PoseidonError;
pub use hash::{poseidon_hash, poseidon_hash_many, poseidon_hash_single, PoseidonHasher};
pub use params::{HadesParams, StarkHades};
pub use permutation::{permute, poseidon_permute, poseidon_permute_comp};
