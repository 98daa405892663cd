//! Arbitrary-precision integer arithmetic with pluggable modular reduction.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod bignum;
pub mod digit;
pub mod errors;
pub mod gcd;
pub mod power;
pub mod prime;
pub mod reduction;
