//! Exact addition, subtraction, multiplication, squaring and shifts.

use super::{BigNumber, Sign};
use crate::digit::{self, Digit, DB};
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

/// Digit-pair addition with a rippled signed carry, resolved against the
/// two sign digits at the end.
fn add_to(a: &BigNumber, b: &BigNumber) -> BigNumber {
    let n = a.len().max(b.len());
    let mut digits = Vec::with_capacity(n + 1);
    let mut c: i64 = 0;
    for i in 0..n {
        c += a.digit(i) as i64 + b.digit(i) as i64;
        digits.push(c as Digit);
        c >>= DB;
    }
    c += a.sign_carry() + b.sign_carry();
    if c != 0 && c != -1 {
        digits.push(c as Digit);
    }
    let sign = if c < 0 { Sign::Negative } else { Sign::NonNegative };
    let mut r = BigNumber { digits, sign };
    BigNumber::clamp(&mut r);
    r
}

fn sub_to(a: &BigNumber, b: &BigNumber) -> BigNumber {
    let n = a.len().max(b.len());
    let mut digits = Vec::with_capacity(n + 1);
    let mut c: i64 = 0;
    for i in 0..n {
        c += a.digit(i) as i64 - b.digit(i) as i64;
        digits.push(c as Digit);
        c >>= DB;
    }
    c += a.sign_carry() - b.sign_carry();
    if c != 0 && c != -1 {
        digits.push(c as Digit);
    }
    let sign = if c < 0 { Sign::Negative } else { Sign::NonNegative };
    let mut r = BigNumber { digits, sign };
    BigNumber::clamp(&mut r);
    r
}

/// Schoolbook multiplication over magnitudes (HAC 14.12), sign restored
/// afterwards.
fn mul_to(a: &BigNumber, b: &BigNumber) -> BigNumber {
    let x = a.abs();
    let y = b.abs();
    if x.digits.is_empty() || y.digits.is_empty() {
        return BigNumber::ZERO;
    }
    let mut digits = vec![0 as Digit; x.len() + y.len()];
    for i in 0..y.len() {
        let carry = digit::mul_add(&x.digits, 0, y.digits[i] as u64, &mut digits, i, 0, x.len());
        digits[i + x.len()] = carry as Digit;
    }
    let mut r = BigNumber { digits, sign: Sign::NonNegative };
    BigNumber::clamp(&mut r);
    if a.sign != b.sign {
        -&r
    } else {
        r
    }
}

impl BigNumber {
    /// The square of this value.
    ///
    /// Exploits symmetry (HAC 14.16): each cross term is computed once and
    /// doubled, then the diagonal terms are added in.
    pub fn square(&self) -> Self {
        let x = self.abs();
        let xt = x.len();
        if xt == 0 {
            return Self::ZERO;
        }
        let mut digits = vec![0 as Digit; 2 * xt];
        for i in 0..xt - 1 {
            let c = digit::mul_add(&x.digits, i, x.digits[i] as u64, &mut digits, 2 * i, 0, 1);
            let c2 = digit::mul_add(
                &x.digits,
                i + 1,
                (x.digits[i] as u64) << 1,
                &mut digits,
                2 * i + 1,
                c,
                xt - i - 1,
            );
            let v = digits[i + xt] as u64 + c2;
            digits[i + xt] = v as Digit;
            digits[i + xt + 1] = (v >> DB) as Digit;
        }
        let c = digit::mul_add(&x.digits, xt - 1, x.digits[xt - 1] as u64, &mut digits, 2 * (xt - 1), 0, 1);
        let top = digits[2 * xt - 1] as u64 + c;
        digits[2 * xt - 1] = top as Digit;
        let mut r = BigNumber { digits, sign: Sign::NonNegative };
        BigNumber::clamp(&mut r);
        r
    }

    /// Shift left by `n` whole digits.
    pub(crate) fn dl_shift(&self, n: usize) -> Self {
        let mut digits = vec![0 as Digit; n];
        digits.extend_from_slice(&self.digits);
        let mut r = BigNumber { digits, sign: self.sign };
        BigNumber::clamp(&mut r);
        r
    }

    /// Shift right by `n` whole digits, rounding toward negative infinity.
    pub(crate) fn dr_shift(&self, n: usize) -> Self {
        if n >= self.digits.len() {
            return BigNumber { digits: Vec::new(), sign: self.sign };
        }
        let mut r = BigNumber { digits: self.digits[n..].to_vec(), sign: self.sign };
        BigNumber::clamp(&mut r);
        r
    }

    fn shl_bits(&self, n: usize) -> Self {
        let ds = n / DB;
        let bs = n % DB;
        if bs == 0 {
            return self.dl_shift(ds);
        }
        let cbs = DB - bs;
        let mut digits = vec![0 as Digit; ds];
        let mut carry: Digit = 0;
        for &d in &self.digits {
            digits.push((d << bs) | carry);
            carry = d >> cbs;
        }
        digits.push((self.sign_word() << bs) | carry);
        let mut r = BigNumber { digits, sign: self.sign };
        BigNumber::clamp(&mut r);
        r
    }

    fn shr_bits(&self, n: usize) -> Self {
        let ds = n / DB;
        if ds >= self.digits.len() {
            return BigNumber { digits: Vec::new(), sign: self.sign };
        }
        let bs = n % DB;
        if bs == 0 {
            return self.dr_shift(ds);
        }
        let cbs = DB - bs;
        let mut digits = Vec::with_capacity(self.digits.len() - ds);
        for i in ds..self.digits.len() {
            digits.push((self.digits[i] >> bs) | (self.digit(i + 1) << cbs));
        }
        let mut r = BigNumber { digits, sign: self.sign };
        BigNumber::clamp(&mut r);
        r
    }

    /// Lower `n` digits of `self * other`; both operands non-negative.
    pub(crate) fn mul_lower(&self, other: &BigNumber, n: usize) -> Self {
        let rt = (self.len() + other.len()).min(n);
        let mut digits = vec![0 as Digit; rt];
        let j = rt.saturating_sub(self.len());
        for i in 0..j {
            let c = digit::mul_add(&self.digits, 0, other.digits[i] as u64, &mut digits, i, 0, self.len());
            digits[i + self.len()] = c as Digit;
        }
        for i in j..other.len().min(n) {
            digit::mul_add(&self.digits, 0, other.digits[i] as u64, &mut digits, i, 0, n - i);
        }
        let mut r = BigNumber { digits, sign: Sign::NonNegative };
        BigNumber::clamp(&mut r);
        r
    }

    /// Approximation of `self * other` without its lower `n` digits: every
    /// product term reaching digit `n - 1` or higher is included, so the
    /// result is at most the exact upper part and short of it only by
    /// carries out of the dropped low terms. Both operands non-negative,
    /// `other` no longer than `n` digits.
    pub(crate) fn mul_upper(&self, other: &BigNumber, n: usize) -> Self {
        let n = n - 1;
        let rt = (self.len() + other.len()).saturating_sub(n);
        let mut digits = vec![0 as Digit; rt];
        let lo = n.saturating_sub(self.len());
        for i in lo..other.len() {
            let count = self.len() + i - n;
            let c = digit::mul_add(&self.digits, n - i, other.digits[i] as u64, &mut digits, 0, 0, count);
            digits[count] = c as Digit;
        }
        let mut r = BigNumber { digits, sign: Sign::NonNegative };
        BigNumber::clamp(&mut r);
        r.dr_shift(1)
    }

    /// In-place multiplication by a small digit; `self` non-negative.
    pub(crate) fn d_multiply(&mut self, n: Digit) {
        let t = self.digits.len();
        self.digits.push(0);
        let mut c: u64 = 0;
        for i in 0..t {
            let v = n as u64 * self.digits[i] as u64 + c;
            self.digits[i] = v as Digit;
            c = v >> DB;
        }
        self.digits[t] = c as Digit;
        BigNumber::clamp(self);
    }

    /// In-place addition of `n << (w * DB)`; `self` non-negative.
    pub(crate) fn d_add_offset(&mut self, n: Digit, w: usize) {
        if n == 0 {
            return;
        }
        while self.digits.len() <= w {
            self.digits.push(0);
        }
        let mut carry = n as u64;
        let mut i = w;
        while carry > 0 {
            if i == self.digits.len() {
                self.digits.push(0);
            }
            let v = self.digits[i] as u64 + carry;
            self.digits[i] = v as Digit;
            carry = v >> DB;
            i += 1;
        }
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, other: &BigNumber) -> BigNumber {
        add_to(self, other)
    }
}

impl Add<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn add(self, other: &BigNumber) -> BigNumber {
        (&self).add(other)
    }
}

impl Add for BigNumber {
    type Output = BigNumber;

    fn add(self, other: BigNumber) -> BigNumber {
        (&self).add(&other)
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    fn sub(self, other: &BigNumber) -> BigNumber {
        sub_to(self, other)
    }
}

impl Sub<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn sub(self, other: &BigNumber) -> BigNumber {
        (&self).sub(other)
    }
}

impl Sub for BigNumber {
    type Output = BigNumber;

    fn sub(self, other: BigNumber) -> BigNumber {
        (&self).sub(&other)
    }
}

impl Mul for &BigNumber {
    type Output = BigNumber;

    fn mul(self, other: &BigNumber) -> BigNumber {
        mul_to(self, other)
    }
}

impl Mul<&BigNumber> for BigNumber {
    type Output = BigNumber;

    fn mul(self, other: &BigNumber) -> BigNumber {
        (&self).mul(other)
    }
}

impl Mul for BigNumber {
    type Output = BigNumber;

    fn mul(self, other: BigNumber) -> BigNumber {
        (&self).mul(&other)
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> BigNumber {
        sub_to(&BigNumber::ZERO, self)
    }
}

impl Neg for BigNumber {
    type Output = BigNumber;

    fn neg(self) -> BigNumber {
        (&self).neg()
    }
}

impl Shl<usize> for &BigNumber {
    type Output = BigNumber;

    fn shl(self, n: usize) -> BigNumber {
        self.shl_bits(n)
    }
}

impl Shl<usize> for BigNumber {
    type Output = BigNumber;

    fn shl(self, n: usize) -> BigNumber {
        (&self).shl(n)
    }
}

impl Shr<usize> for &BigNumber {
    type Output = BigNumber;

    fn shr(self, n: usize) -> BigNumber {
        self.shr_bits(n)
    }
}

impl Shr<usize> for BigNumber {
    type Output = BigNumber;

    fn shr(self, n: usize) -> BigNumber {
        (&self).shr(n)
    }
}
