//! Barrett reduction (HAC 14.42), valid for any positive modulus.

use crate::{bignum::BigNumber, errors::UnsuitableModulus};

/// Reduction by a precomputed reciprocal approximation
/// `mu = floor(DV^(2k) / m)`: two truncated multiplications replace the
/// division, followed by a bounded correction loop. Serves the even moduli
/// Montgomery cannot.
pub struct Barrett {
    modulus: BigNumber,
    mu: BigNumber,
}

impl Barrett {
    /// Bind to a positive modulus.
    pub fn new(modulus: &BigNumber) -> Result<Self, UnsuitableModulus> {
        if modulus.signum() <= 0 {
            return Err(UnsuitableModulus::NonPositive);
        }
        let radix_square = BigNumber::one().dl_shift(2 * modulus.len());
        let mu = radix_square.div_rem_unchecked(modulus).0;
        Ok(Self { modulus: modulus.clone(), mu })
    }

    /// Reduce into `[0, m)`.
    pub fn convert(&self, x: &BigNumber) -> BigNumber {
        if x.signum() < 0 || x.len() > 2 * self.modulus.len() {
            // Out of the approximation's working range, fall back to
            // division.
            x.modulo_unchecked(&self.modulus)
        } else if x < &self.modulus {
            x.clone()
        } else {
            let mut r = x.clone();
            self.reduce(&mut r);
            r
        }
    }

    /// Identity; the internal representation is ordinary.
    pub fn revert(&self, x: &BigNumber) -> BigNumber {
        x.clone()
    }

    /// `x = x mod m` for `0 <= x < DV^(2k)`.
    pub fn reduce(&self, x: &mut BigNumber) {
        let k = self.modulus.len();
        let q1 = x.dr_shift(k - 1);
        if x.len() > k + 1 {
            x.digits.truncate(k + 1);
            BigNumber::clamp(x);
        }
        let q3 = self.mu.mul_upper(&q1, k + 1);
        let r2 = self.modulus.mul_lower(&q3, k + 1);
        // The truncated estimate can undershoot x by a few multiples of
        // DV^(k+1).
        while &*x < &r2 {
            x.d_add_offset(1, k + 1);
        }
        *x = &*x - &r2;
        while &*x >= &self.modulus {
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
    #[case(10u64)]
    #[case(1_000_006u64)]
    #[case(97u64)]
    fn reduce_matches_division(#[case] modulus: u64) {
        let m = BigNumber::from(modulus);
        let z = Barrett::new(&m).unwrap();
        let mut rng = StdRng::seed_from_u64(60);
        for _ in 0..20 {
            let x = BigNumber::random_bits(2 * 32 * m.bit_length().div_ceil(32), &mut rng);
            let mut r = x.clone();
            z.reduce(&mut r);
            assert_eq!(BigInt::from(&r), BigInt::from(&x) % BigInt::from(modulus));
        }
    }

    #[test]
    fn large_even_modulus() {
        let mut rng = StdRng::seed_from_u64(61);
        let m = BigNumber::random_bits(512, &mut rng).set_bit(511).clear_bit(0);
        let z = Barrett::new(&m).unwrap();
        for _ in 0..10 {
            let x = BigNumber::random_bits(1000, &mut rng);
            let reduced = z.convert(&x);
            assert_eq!(BigInt::from(&reduced), BigInt::from(&x) % BigInt::from(&m));
        }
    }

    #[test]
    fn convert_handles_negatives() {
        let m = BigNumber::from(1000);
        let z = Barrett::new(&m).unwrap();
        assert_eq!(z.convert(&BigNumber::from(-3)), BigNumber::from(997));
    }

    #[test]
    fn rejects_bad_modulus() {
        assert!(Barrett::new(&BigNumber::ZERO).is_err());
        assert!(Barrett::new(&BigNumber::from(-2)).is_err());
    }
}
