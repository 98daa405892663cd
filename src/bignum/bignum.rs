//! Signed arbitrary-precision integers.

use crate::{
    digit::{self, Digit, DM},
    errors::ParseError,
};
use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

/// The sign-extension digit of a number, logically repeated infinitely to
/// the left of the stored digits: `0` for non-negative values, all ones for
/// negative ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Extension digit zero.
    NonNegative,

    /// Extension digit all ones (two's complement negative).
    Negative,
}

/// A signed arbitrary-precision integer.
///
/// The value is an infinite two's-complement digit sequence: a little-endian
/// vector of base-`2^32` digits followed by an implicit infinite repetition
/// of the sign digit. The stored digits are always canonical (no trailing
/// digit equals the sign-extension word), so structural equality is
/// numerical equality.
///
/// All operations are exact and return fresh values; nothing mutates an
/// operand.
///
/// # Examples
///
/// ```
/// use bignum_lib::bignum::BigNumber;
///
/// # fn test() -> anyhow::Result<()> {
/// let a = BigNumber::from_str_radix("ff", 16)?;
/// assert_eq!(a, BigNumber::from(255));
/// assert_eq!(a.to_str_radix(16)?, "ff");
/// # Ok(())
/// # }
/// ```
///
/// # num_bigint conversions
///
/// [BigNumber] converts to and from [num_bigint::BigInt] through the signed
/// byte encoding:
///
/// ```
/// use bignum_lib::bignum::BigNumber;
/// use num_bigint::BigInt;
///
/// let value = BigNumber::from(-42);
/// assert_eq!(BigInt::from(&value), BigInt::from(-42));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BigNumber {
    pub(crate) digits: Vec<Digit>,
    pub(crate) sign: Sign,
}

impl BigNumber {
    /// The zero value.
    pub const ZERO: Self = BigNumber { digits: Vec::new(), sign: Sign::NonNegative };

    /// The value one.
    pub fn one() -> Self {
        BigNumber { digits: vec![1], sign: Sign::NonNegative }
    }

    /// The sign-extension word: `0` or all ones.
    pub(crate) fn sign_word(&self) -> Digit {
        match self.sign {
            Sign::NonNegative => 0,
            Sign::Negative => DM,
        }
    }

    /// The sign digit as a signed carry: `0` or `-1`.
    pub(crate) fn sign_carry(&self) -> i64 {
        match self.sign {
            Sign::NonNegative => 0,
            Sign::Negative => -1,
        }
    }

    /// Digit `index` of the infinite two's-complement expansion.
    pub(crate) fn digit(&self, index: usize) -> Digit {
        self.digits.get(index).copied().unwrap_or_else(|| self.sign_word())
    }

    /// Number of stored digits.
    pub(crate) fn len(&self) -> usize {
        self.digits.len()
    }

    /// Remove trailing digits equal to the sign-extension word, restoring
    /// canonical form.
    pub(crate) fn clamp(&mut self) {
        let ext = self.sign_word();
        while self.digits.last() == Some(&ext) {
            self.digits.pop();
        }
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty() && self.sign == Sign::NonNegative
    }

    /// Whether this value is one.
    pub fn is_one(&self) -> bool {
        self.sign == Sign::NonNegative && self.digits == [1]
    }

    /// Whether this value is even.
    pub fn is_even(&self) -> bool {
        self.digit(0) & 1 == 0
    }

    /// The sign of this value: `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        match self.sign {
            Sign::Negative => -1,
            Sign::NonNegative if self.digits.is_empty() => 0,
            Sign::NonNegative => 1,
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        match self.sign {
            Sign::Negative => -self,
            Sign::NonNegative => self.clone(),
        }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        // The two's-complement bit pattern of the i64 is already the
        // sign-extended digit representation.
        let mut r = BigNumber {
            digits: vec![value as Digit, (value >> digit::DB) as Digit],
            sign: if value < 0 { Sign::Negative } else { Sign::NonNegative },
        };
        BigNumber::clamp(&mut r);
        r
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        let mut r = BigNumber {
            digits: vec![value as Digit, (value >> digit::DB) as Digit],
            sign: Sign::NonNegative,
        };
        BigNumber::clamp(&mut r);
        r
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl num_traits::Zero for BigNumber {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty() && self.sign == Sign::NonNegative
    }
}

impl num_traits::One for BigNumber {
    fn one() -> Self {
        BigNumber { digits: vec![1], sign: Sign::NonNegative }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::NonNegative && self.digits == [1]
    }
}

impl Display for BigNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_radix_unchecked(10))
    }
}

impl Debug for BigNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_radix_unchecked(10))
    }
}

impl FromStr for BigNumber {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(input, 10)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, true)]
    #[case(1, 1, false)]
    #[case(-1, -1, false)]
    #[case(42, 1, false)]
    #[case(-42, -1, false)]
    #[case(i64::MAX, 1, false)]
    #[case(i64::MIN, -1, false)]
    fn construction(#[case] value: i64, #[case] signum: i32, #[case] zero: bool) {
        let n = BigNumber::from(value);
        assert_eq!(n.signum(), signum);
        assert_eq!(n.is_zero(), zero);
        assert_eq!(i64::try_from(&n).ok(), Some(value));
    }

    #[test]
    fn canonical_minus_one() {
        // -1 is pure sign extension: no stored digits.
        let n = BigNumber::from(-1);
        assert!(n.digits.is_empty());
        assert_eq!(n.sign, Sign::Negative);
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(-1, false)]
    #[case(-2, true)]
    fn evenness(#[case] value: i64, #[case] even: bool) {
        assert_eq!(BigNumber::from(value).is_even(), even);
    }

    #[rstest]
    #[case(5, 5)]
    #[case(-5, 5)]
    #[case(0, 0)]
    fn absolute_value(#[case] value: i64, #[case] expected: i64) {
        assert_eq!(BigNumber::from(value).abs(), BigNumber::from(expected));
    }

    #[test]
    fn display() {
        assert_eq!(BigNumber::from(-1234).to_string(), "-1234");
        assert_eq!(BigNumber::ZERO.to_string(), "0");
    }

    #[test]
    fn parse_decimal() {
        let n: BigNumber = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(n.to_string(), "123456789012345678901234567890");
    }
}
