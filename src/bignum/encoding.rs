//! String, byte and native-integer codecs.

use super::{BigNumber, Sign};
use crate::{
    digit::{Digit, DB},
    errors::{InvalidRadix, Overflow, ParseError},
};
use num_bigint::BigInt;

/// Radix digit characters, lowercase.
const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest power of `radix` that fits one digit: `(exponent, radix^exponent)`.
fn chunk(radix: u32) -> (u32, Digit) {
    let mut exponent = 1;
    let mut power = radix as u64;
    while power * radix as u64 <= Digit::MAX as u64 {
        power *= radix as u64;
        exponent += 1;
    }
    (exponent, power as Digit)
}

impl BigNumber {
    /// Parse a value from a string in the given radix (2 to 36).
    ///
    /// Digits are `0-9a-z`, case-insensitive; a single leading `-` marks a
    /// negative value; any other character is rejected.
    pub fn from_str_radix(input: &str, radix: u32) -> Result<Self, ParseError> {
        if !(2..=36).contains(&radix) {
            return Err(InvalidRadix(radix).into());
        }
        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        if body.is_empty() {
            return Err(ParseError::Empty);
        }
        let (chunk_len, chunk_power) = chunk(radix);
        let mut r = Self::ZERO;
        let mut window: Digit = 0;
        let mut pending = 0;
        for c in body.chars() {
            let x = c.to_digit(radix).ok_or(ParseError::InvalidDigit(c, radix))?;
            window = window * radix + x;
            pending += 1;
            if pending == chunk_len {
                r.d_multiply(chunk_power);
                r.d_add_offset(window, 0);
                window = 0;
                pending = 0;
            }
        }
        if pending > 0 {
            r.d_multiply(radix.pow(pending));
            r.d_add_offset(window, 0);
        }
        if negative {
            r = -&r;
        }
        Ok(r)
    }

    /// Format this value in the given radix (2 to 36), lowercase.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, InvalidRadix> {
        if !(2..=36).contains(&radix) {
            return Err(InvalidRadix(radix));
        }
        Ok(self.to_radix_unchecked(radix))
    }

    pub(crate) fn to_radix_unchecked(&self, radix: u32) -> String {
        if self.is_zero() {
            return "0".into();
        }
        if self.sign == Sign::Negative {
            return format!("-{}", self.abs().to_radix_unchecked(radix));
        }
        let (chunk_len, chunk_power) = chunk(radix);
        let divisor = Self::from(chunk_power);
        let mut chunks = Vec::new();
        let mut y = self.clone();
        while !y.is_zero() {
            let (q, z) = y.div_rem_unchecked(&divisor);
            chunks.push(z.digit(0));
            y = q;
        }
        let mut out = String::new();
        for (i, &value) in chunks.iter().enumerate().rev() {
            let width = if i == chunks.len() - 1 { 1 } else { chunk_len as usize };
            push_radix(value, radix, width, &mut out);
        }
        out
    }

    /// Big-endian two's-complement byte encoding, minimal length.
    ///
    /// A leading `0x00` or `0xff` byte appears exactly when needed to make
    /// the first byte's high bit reflect the sign. Round-trips with
    /// [BigNumber::from_signed_bytes_be].
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        let sign_byte: u8 = match self.sign {
            Sign::Negative => 0xff,
            Sign::NonNegative => 0x00,
        };
        let mut bytes = Vec::with_capacity(self.digits.len() * 4 + 1);
        for &d in &self.digits {
            bytes.extend_from_slice(&d.to_le_bytes());
        }
        let mut len = bytes.len();
        while len > 1 && bytes[len - 1] == sign_byte && (bytes[len - 2] & 0x80) == (sign_byte & 0x80) {
            len -= 1;
        }
        bytes.truncate(len);
        if bytes.is_empty() {
            bytes.push(sign_byte);
        } else if (bytes[len - 1] & 0x80) != (sign_byte & 0x80) {
            bytes.push(sign_byte);
        }
        bytes.reverse();
        bytes
    }

    /// Decode a big-endian two's-complement byte sequence; a set high bit
    /// in the first byte marks a negative value. The empty sequence is
    /// zero.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::ZERO;
        }
        let negative = bytes[0] & 0x80 != 0;
        let fill: u8 = if negative { 0xff } else { 0x00 };
        let mut digits = Vec::with_capacity(bytes.len() / 4 + 1);
        for group in bytes.rchunks(4) {
            let mut word = [fill; 4];
            for (k, &b) in group.iter().rev().enumerate() {
                word[k] = b;
            }
            digits.push(Digit::from_le_bytes(word));
        }
        let sign = if negative { Sign::Negative } else { Sign::NonNegative };
        let mut r = BigNumber { digits, sign };
        BigNumber::clamp(&mut r);
        r
    }
}

fn push_radix(value: Digit, radix: u32, min_width: usize, out: &mut String) {
    let mut buf = [0u8; 32];
    let mut i = 0;
    let mut v = value;
    loop {
        buf[i] = DIGIT_CHARS[(v % radix) as usize];
        v /= radix;
        i += 1;
        if v == 0 {
            break;
        }
    }
    while i < min_width {
        buf[i] = b'0';
        i += 1;
    }
    for k in (0..i).rev() {
        out.push(buf[k] as char);
    }
}

impl TryFrom<&BigNumber> for i64 {
    type Error = Overflow;

    fn try_from(value: &BigNumber) -> Result<Self, Self::Error> {
        if value.digits.len() > 2 {
            return Err(Overflow);
        }
        let raw = ((value.digit(1) as u64) << DB) | value.digit(0) as u64;
        let converted = raw as i64;
        if (converted < 0) != (value.sign == Sign::Negative) {
            return Err(Overflow);
        }
        Ok(converted)
    }
}

impl TryFrom<&BigNumber> for u64 {
    type Error = Overflow;

    fn try_from(value: &BigNumber) -> Result<Self, Self::Error> {
        if value.sign == Sign::Negative || value.digits.len() > 2 {
            return Err(Overflow);
        }
        Ok(((value.digit(1) as u64) << DB) | value.digit(0) as u64)
    }
}

impl From<&BigNumber> for BigInt {
    fn from(value: &BigNumber) -> Self {
        BigInt::from_signed_bytes_be(&value.to_signed_bytes_be())
    }
}

impl From<&BigInt> for BigNumber {
    fn from(value: &BigInt) -> Self {
        Self::from_signed_bytes_be(&value.to_signed_bytes_be())
    }
}
