//! Bitwise operations and bit-level queries over the infinite
//! two's-complement view.

use super::{BigNumber, Sign};
use crate::digit::{self, Digit, DB};
use std::ops::{BitAnd, BitOr, BitXor, Not};

impl BigNumber {
    /// Digit-wise application of `f`, with each out-of-range digit replaced
    /// by its operand's sign-extension word and the result sign digit being
    /// `f` of the two sign words.
    fn bitwise(&self, other: &Self, f: impl Fn(Digit, Digit) -> Digit) -> Self {
        let n = self.len().max(other.len());
        let mut digits = Vec::with_capacity(n);
        for i in 0..n {
            digits.push(f(self.digit(i), other.digit(i)));
        }
        let sign = if f(self.sign_word(), other.sign_word()) == 0 {
            Sign::NonNegative
        } else {
            Sign::Negative
        };
        let mut r = BigNumber { digits, sign };
        BigNumber::clamp(&mut r);
        r
    }

    /// `self & !other`.
    pub fn and_not(&self, other: &Self) -> Self {
        self.bitwise(other, |x, y| x & !y)
    }

    /// Number of bits in the minimal two's-complement representation,
    /// excluding the sign bit. Zero and minus one have bit length 0.
    pub fn bit_length(&self) -> usize {
        if self.digits.is_empty() {
            return 0;
        }
        let top = self.digits[self.digits.len() - 1] ^ self.sign_word();
        DB * (self.digits.len() - 1) + digit::bit_length(top)
    }

    /// Index of the lowest set bit, or `None` when no bit is set.
    pub fn lowest_set_bit(&self) -> Option<usize> {
        for (i, &d) in self.digits.iter().enumerate() {
            if d != 0 {
                return Some(i * DB + digit::lowest_set_bit(d));
            }
        }
        match self.sign {
            Sign::Negative => Some(self.digits.len() * DB),
            Sign::NonNegative => None,
        }
    }

    /// Number of bits that differ from the sign digit.
    pub fn bit_count(&self) -> usize {
        let x = self.sign_word();
        self.digits.iter().map(|&d| (d ^ x).count_ones() as usize).sum()
    }

    /// Whether bit `n` is set.
    pub fn test_bit(&self, n: usize) -> bool {
        let j = n / DB;
        if j >= self.digits.len() {
            return self.sign == Sign::Negative;
        }
        self.digits[j] & (1 << (n % DB)) != 0
    }

    /// This value with bit `n` set.
    pub fn set_bit(&self, n: usize) -> Self {
        self | &(BigNumber::one() << n)
    }

    /// This value with bit `n` cleared.
    pub fn clear_bit(&self, n: usize) -> Self {
        self.and_not(&(BigNumber::one() << n))
    }

    /// This value with bit `n` flipped.
    pub fn flip_bit(&self, n: usize) -> Self {
        self ^ &(BigNumber::one() << n)
    }
}

impl BitAnd for &BigNumber {
    type Output = BigNumber;

    fn bitand(self, other: &BigNumber) -> BigNumber {
        self.bitwise(other, |x, y| x & y)
    }
}

impl BitAnd<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn bitand(self, other: &BigNumber) -> BigNumber {
        (&self).bitand(other)
    }
}

impl BitOr for &BigNumber {
    type Output = BigNumber;

    fn bitor(self, other: &BigNumber) -> BigNumber {
        self.bitwise(other, |x, y| x | y)
    }
}

impl BitOr<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn bitor(self, other: &BigNumber) -> BigNumber {
        (&self).bitor(other)
    }
}

impl BitXor for &BigNumber {
    type Output = BigNumber;

    fn bitxor(self, other: &BigNumber) -> BigNumber {
        self.bitwise(other, |x, y| x ^ y)
    }
}

impl BitXor<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn bitxor(self, other: &BigNumber) -> BigNumber {
        (&self).bitxor(other)
    }
}

impl Not for &BigNumber {
    type Output = BigNumber;

    fn not(self) -> BigNumber {
        let digits = self.digits.iter().map(|&d| !d).collect();
        let sign = match self.sign {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        };
        let mut r = BigNumber { digits, sign };
        BigNumber::clamp(&mut r);
        r
    }
}

impl Not for BigNumber {
    type Output = BigNumber;

    fn not(self) -> BigNumber {
        !&self
    }
}
