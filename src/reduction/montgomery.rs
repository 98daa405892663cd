//! Montgomery reduction for odd moduli (HAC 14.32).

use crate::{
    bignum::BigNumber,
    digit::{self, Digit, DB},
    errors::UnsuitableModulus,
};

/// Montgomery-form reduction: values are carried as `x * R mod m` for
/// `R = DV^k` with `k` the modulus digit count, so each reduction costs a
/// digit-wise pass instead of a division.
pub struct Montgomery {
    modulus: BigNumber,
    /// `-m^(-1) mod DV`, the per-digit correction factor.
    neg_inv_digit: Digit,
}

/// Hensel lifting of the digit inverse: for odd `x`, `x` is its own
/// inverse mod 8, and each Newton step `y = y * (2 - x * y)` doubles the
/// valid bit count.
fn neg_inv_digit(x: Digit) -> Digit {
    let mut y = x;
    for _ in 0..4 {
        y = y.wrapping_mul(2u32.wrapping_sub(x.wrapping_mul(y)));
    }
    y.wrapping_neg()
}

impl Montgomery {
    /// Bind to a positive odd modulus.
    pub fn new(modulus: &BigNumber) -> Result<Self, UnsuitableModulus> {
        if modulus.signum() <= 0 {
            return Err(UnsuitableModulus::NonPositive);
        }
        if modulus.is_even() {
            return Err(UnsuitableModulus::Even);
        }
        let neg_inv_digit = neg_inv_digit(modulus.digit(0));
        Ok(Self { modulus: modulus.clone(), neg_inv_digit })
    }

    /// `x * R mod m`.
    pub fn convert(&self, x: &BigNumber) -> BigNumber {
        let r = x.abs().dl_shift(self.modulus.len()).rem_unchecked(&self.modulus);
        if x.signum() < 0 && r.signum() > 0 {
            &self.modulus - &r
        } else {
            r
        }
    }

    /// `x / R mod m`.
    pub fn revert(&self, x: &BigNumber) -> BigNumber {
        let mut r = x.clone();
        self.reduce(&mut r);
        r
    }

    /// `x = x / R mod m`, digit at a time: each step zeroes the lowest
    /// remaining digit by adding the right multiple of the modulus, then
    /// the whole value shifts down `k` digits with one final conditional
    /// subtraction.
    pub fn reduce(&self, x: &mut BigNumber) {
        let k = self.modulus.len();
        while x.digits.len() <= 2 * k {
            x.digits.push(0);
        }
        for i in 0..k {
            let u0 = x.digits[i].wrapping_mul(self.neg_inv_digit);
            let mut carry = digit::mul_add(&self.modulus.digits, 0, u0 as u64, &mut x.digits, i, 0, k);
            let mut j = i + k;
            while carry > 0 {
                if j == x.digits.len() {
                    x.digits.push(0);
                }
                let v = x.digits[j] as u64 + carry;
                x.digits[j] = v as Digit;
                carry = v >> DB;
                j += 1;
            }
        }
        BigNumber::clamp(x);
        *x = x.dr_shift(k);
        if &*x >= &self.modulus {
            *x = &*x - &self.modulus;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(0x8000_0001)]
    #[case(0xffff_ffff)]
    fn digit_inverse(#[case] x: Digit) {
        // m * (-m^-1) == -1 mod DV
        let neg_inv = neg_inv_digit(x);
        assert_eq!(x.wrapping_mul(neg_inv).wrapping_add(1), 0);
    }

    #[test]
    fn rejects_even_or_non_positive_modulus() {
        assert!(matches!(
            Montgomery::new(&BigNumber::from(10)),
            Err(UnsuitableModulus::Even)
        ));
        assert!(matches!(
            Montgomery::new(&BigNumber::ZERO),
            Err(UnsuitableModulus::NonPositive)
        ));
    }

    #[test]
    fn convert_revert_round_trip() {
        let mut rng = StdRng::seed_from_u64(50);
        for bits in [32, 64, 256, 500] {
            let m = BigNumber::random_bits(bits, &mut rng).set_bit(bits - 1).set_bit(0);
            let z = Montgomery::new(&m).unwrap();
            for _ in 0..5 {
                let x = BigNumber::random_bits(bits + 50, &mut rng);
                let expected = x.modulo_unchecked(&m);
                assert_eq!(z.revert(&z.convert(&x)), expected);
            }
        }
    }

    #[test]
    fn convert_handles_negatives() {
        let m = BigNumber::from(1_000_003);
        let z = Montgomery::new(&m).unwrap();
        let x = BigNumber::from(-5);
        assert_eq!(z.revert(&z.convert(&x)), BigNumber::from(1_000_003 - 5));
    }

    #[test]
    fn reduction_matches_reference() {
        let mut rng = StdRng::seed_from_u64(51);
        let m = BigNumber::random_bits(256, &mut rng).set_bit(255).set_bit(0);
        let z = Montgomery::new(&m).unwrap();
        let a = BigNumber::random_bits(255, &mut rng);
        let b = BigNumber::random_bits(255, &mut rng);
        // Montgomery multiplication of converted values, reverted, is the
        // plain modular product.
        let mut out = &z.convert(&a) * &z.convert(&b);
        z.reduce(&mut out);
        let product = z.revert(&out);
        let expected = (BigInt::from(&a) * BigInt::from(&b)) % BigInt::from(&m);
        assert_eq!(BigInt::from(&product), expected);
    }
}
