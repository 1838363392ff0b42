//! Arithmetic over the Stark prime field `p = 2^251 + 17 * 2^192 + 1`.
//!
//! [`Felt`] stores its value in Montgomery form on top of the fixed-width
//! [`U256`] limb vector; the [`montgomery`] module holds the reduction engine.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::should_implement_trait)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
mod felt;
pub mod montgomery;
pub mod types;
pub mod uint;

#[cfg(test)]
mod field_testing;
#[cfg(test)]
mod prime_field_testing;

pub use error::{FeltError, ParseErrorKind};
pub use felt::{Felt, FELT_BYTES};
pub use uint::U256;
