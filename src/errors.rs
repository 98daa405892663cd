//! Crate errors.

use thiserror::Error;

/// Division by zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivisionByZero;

/// The radix is outside the supported `2..=36` range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("radix {0} is outside the supported range 2..=36")]
pub struct InvalidRadix(pub u32);

/// An error when parsing a number from a string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The requested radix is not supported.
    #[error(transparent)]
    InvalidRadix(#[from] InvalidRadix),

    /// The input contained no digits.
    #[error("empty input")]
    Empty,

    /// The input contained a character that is not a digit of the radix.
    #[error("invalid digit {0:?} for radix {1}")]
    InvalidDigit(char, u32),
}

/// A value does not fit in the requested native integer type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("overflow")]
pub struct Overflow;

/// The modulus cannot be used with the requested reduction strategy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsuitableModulus {
    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    NonPositive,

    /// Montgomery reduction needs a modulus coprime with the digit radix.
    #[error("montgomery reduction requires an odd modulus")]
    Even,
}

/// An error during modular exponentiation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModPowError {
    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    NonPositiveModulus,

    /// The exponent is negative.
    #[error("exponent must not be negative")]
    NegativeExponent,
}

impl From<UnsuitableModulus> for ModPowError {
    // The strategy selection policy never binds Montgomery to an even
    // modulus, so the only reachable construction failure is sign.
    fn from(_: UnsuitableModulus) -> Self {
        ModPowError::NonPositiveModulus
    }
}

/// An error when computing a modular inverse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InverseError {
    /// The modulus is zero or negative.
    #[error("modulus must be positive")]
    NonPositiveModulus,

    /// The value shares a factor with the modulus, so no inverse exists.
    #[error("no modular inverse exists")]
    NotInvertible,
}

/// The requested bit length is outside the valid range for the operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid bit length {0}")]
pub struct InvalidBitLength(pub usize);
