//! The arbitrary-precision value type and its exact arithmetic.

pub mod arith;
pub mod bignum;
pub mod bits;
pub mod cmp;
pub mod division;
pub mod encoding;
pub mod random;

pub use bignum::*;
