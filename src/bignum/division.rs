//! Normalized long division (HAC 14.20).

use super::{BigNumber, Sign};
use crate::{
    digit::{Digit, DB, DV},
    errors::DivisionByZero,
};
use std::ops::{Div, Rem};

impl BigNumber {
    /// Quotient and remainder of truncating division.
    ///
    /// The quotient rounds toward zero and the remainder keeps the sign of
    /// the dividend.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(self.div_rem_unchecked(divisor))
    }

    /// Remainder normalized into `[0, m)` for positive `m`.
    pub fn modulo(&self, m: &Self) -> Result<Self, DivisionByZero> {
        if m.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(self.modulo_unchecked(m))
    }

    pub(crate) fn modulo_unchecked(&self, m: &Self) -> Self {
        let r = self.abs().rem_unchecked(m);
        if self.sign == Sign::Negative && r.signum() > 0 {
            m - &r
        } else {
            r
        }
    }

    pub(crate) fn rem_unchecked(&self, divisor: &Self) -> Self {
        self.div_rem_unchecked(divisor).1
    }

    pub(crate) fn div_rem_unchecked(&self, divisor: &Self) -> (Self, Self) {
        let pm = divisor.abs();
        let pt = self.abs();
        if pt < pm {
            return (Self::ZERO, self.clone());
        }
        let (q_mag, r_mag) = if pm.digits.len() == 1 {
            div_rem_digit(&pt, pm.digits[0])
        } else {
            div_rem_knuth(&pt, &pm)
        };
        let q = if self.sign != divisor.sign { -&q_mag } else { q_mag };
        let r = if self.sign == Sign::Negative { -&r_mag } else { r_mag };
        (q, r)
    }

    /// Remainder by a single digit; `0` for `n == 0`.
    pub(crate) fn mod_digit(&self, n: Digit) -> Digit {
        if n == 0 {
            return 0;
        }
        let n64 = n as u64;
        let d = DV % n64;
        let mut r: u64 = match self.sign {
            Sign::Negative => (n - 1) as u64,
            Sign::NonNegative => 0,
        };
        if !self.digits.is_empty() {
            if d == 0 {
                // The radix is a multiple of n, only the low digit matters.
                r = self.digits[0] as u64 % n64;
            } else {
                for i in (0..self.digits.len()).rev() {
                    r = (d * r + self.digits[i] as u64) % n64;
                }
            }
        }
        r as Digit
    }
}

/// Short division by a single normalized-free digit.
fn div_rem_digit(pt: &BigNumber, d: Digit) -> (BigNumber, BigNumber) {
    let d64 = d as u64;
    let mut q = vec![0 as Digit; pt.digits.len()];
    let mut rem: u64 = 0;
    for i in (0..pt.digits.len()).rev() {
        let cur = (rem << DB) | pt.digits[i] as u64;
        q[i] = (cur / d64) as Digit;
        rem = cur % d64;
    }
    let mut quotient = BigNumber { digits: q, sign: Sign::NonNegative };
    BigNumber::clamp(&mut quotient);
    (quotient, BigNumber::from(rem))
}

/// Knuth's algorithm D over magnitudes; `pt >= pm`, `pm` at least two
/// digits.
///
/// Both operands are shifted left so the divisor's leading digit has its
/// top bit set; each quotient digit starts as a fixed-point estimate from
/// the dividend's top two digits over the divisor's leading digit, is
/// refined against the next divisor digit, and a still-too-large estimate
/// is repaired by one add-back after the multiply-subtract.
fn div_rem_knuth(pt: &BigNumber, pm: &BigNumber) -> (BigNumber, BigNumber) {
    let nsh = pm.digits[pm.digits.len() - 1].leading_zeros() as usize;
    let y = pm << nsh;
    let mut w = (pt << nsh).digits;
    let ys = y.digits.len();
    let w_len = w.len();
    w.push(0);
    let y0 = y.digits[ys - 1] as u64;
    let y1 = y.digits[ys - 2] as u64;
    let mut q = vec![0 as Digit; w_len - ys + 1];
    for j in (0..=w_len - ys).rev() {
        let top2 = ((w[j + ys] as u64) << DB) | w[j + ys - 1] as u64;
        let mut qhat = top2 / y0;
        let mut rhat = top2 % y0;
        loop {
            if qhat >= DV || qhat * y1 > ((rhat << DB) | w[j + ys - 2] as u64) {
                qhat -= 1;
                rhat += y0;
                if rhat < DV {
                    continue;
                }
            }
            break;
        }
        if sub_mul(&mut w[j..=j + ys], &y.digits, qhat) {
            qhat -= 1;
            add_back(&mut w[j..=j + ys], &y.digits);
        }
        q[j] = qhat as Digit;
    }
    let mut quotient = BigNumber { digits: q, sign: Sign::NonNegative };
    BigNumber::clamp(&mut quotient);
    let mut rem = BigNumber { digits: w[..ys].to_vec(), sign: Sign::NonNegative };
    BigNumber::clamp(&mut rem);
    (quotient, &rem >> nsh)
}

/// `w -= q * y` over one quotient-digit window; true when the estimate was
/// one too large and the subtraction borrowed out.
fn sub_mul(w: &mut [Digit], y: &[Digit], q: u64) -> bool {
    let mut mul_carry: u64 = 0;
    let mut borrow: i64 = 0;
    for i in 0..y.len() {
        let p = q * y[i] as u64 + mul_carry;
        mul_carry = p >> DB;
        let d = w[i] as i64 - (p as Digit) as i64 + borrow;
        w[i] = d as Digit;
        borrow = d >> DB;
    }
    let d = w[y.len()] as i64 - mul_carry as i64 + borrow;
    w[y.len()] = d as Digit;
    (d >> DB) != 0
}

fn add_back(w: &mut [Digit], y: &[Digit]) {
    let mut c: u64 = 0;
    for i in 0..y.len() {
        let v = w[i] as u64 + y[i] as u64 + c;
        w[i] = v as Digit;
        c = v >> DB;
    }
    // The carry out cancels the borrow from the oversubtraction.
    let v = w[y.len()] as u64 + c;
    w[y.len()] = v as Digit;
}

impl Div for &BigNumber {
    type Output = Result<BigNumber, DivisionByZero>;

    fn div(self, other: &BigNumber) -> Self::Output {
        Ok(self.div_rem(other)?.0)
    }
}

impl Div<&BigNumber> for BigNumber {
    type Output = Result<BigNumber, DivisionByZero>;

    fn div(self, other: &BigNumber) -> Self::Output {
        (&self).div(other)
    }
}

impl Rem for &BigNumber {
    type Output = Result<BigNumber, DivisionByZero>;

    fn rem(self, other: &BigNumber) -> Self::Output {
        Ok(self.div_rem(other)?.1)
    }
}

impl Rem<&BigNumber> for BigNumber {
    type Output = Result<BigNumber, DivisionByZero>;

    fn rem(self, other: &BigNumber) -> Self::Output {
        (&self).rem(other)
    }
}
