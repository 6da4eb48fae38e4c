//! Fixed Big Num \
//! This crate provides:
//! - [`BigInt`]: Signed decimal integers bounded to a fixed number of digits chosen at the type level.
//!   Arithmetic (`+`, `-`, `*`), ordering and decimal text conversion never truncate: a result that
//!   needs more digits than the type holds is reported as [`Error::Overflow`].
//!
//! Division is not provided; [`Error::DivisionByZero`] is reserved for it.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
#[cfg(feature = "serde")]
mod serde_impl;
mod stream;

pub use big_int::{BigInt, BigInt40k};
pub use big_num_constants::{BASE, BLOCK_DIGITS, DEFAULT_DIGITS};
pub use error::{Error, Result};
