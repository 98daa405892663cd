//! Windowed modular exponentiation (HAC 14.85) and plain exponentiation.

use crate::{
    bignum::BigNumber,
    digit::{self, DB},
    errors::ModPowError,
    reduction::{Classic, Montgomery, Null, Reducer},
};

/// Window width for an exponent of `bits` bits: wider windows trade
/// precomputation for fewer multiplications.
fn window_size(bits: usize) -> usize {
    if bits < 18 {
        1
    } else if bits < 48 {
        3
    } else if bits < 144 {
        4
    } else if bits < 768 {
        5
    } else {
        6
    }
}

impl BigNumber {
    /// `self ^ exponent mod modulus`.
    ///
    /// The reduction strategy is chosen from the modulus shape and bound
    /// once; the exponent is consumed most-significant-bit first in fixed
    /// windows over a table of precomputed odd powers.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, ModPowError> {
        if modulus.signum() <= 0 {
            return Err(ModPowError::NonPositiveModulus);
        }
        if exponent.signum() < 0 {
            return Err(ModPowError::NegativeExponent);
        }
        let bits = exponent.bit_length();
        if bits == 0 {
            return Ok(Self::one().modulo_unchecked(modulus));
        }
        let k = window_size(bits);
        let z = Reducer::for_modulus(modulus, bits)?;

        // Precompute g[w] = self^w for every odd w below 2^k, in internal
        // representation.
        let km = (1usize << k) - 1;
        let mut g = vec![Self::ZERO; km + 1];
        g[1] = z.convert(self);
        if k > 1 {
            let mut g2 = Self::ZERO;
            z.sqr_to(&g[1], &mut g2);
            let mut n = 3;
            while n <= km {
                let mut next = Self::ZERO;
                z.mul_to(&g2, &g[n - 2], &mut next);
                g[n] = next;
                n += 2;
            }
        }

        let mut j = (exponent.digits.len() - 1) as isize;
        let mut i = digit::bit_length(exponent.digits[j as usize]) as isize - 1;
        let k1 = k - 1;
        let mut first = true;
        let mut r = Self::one();
        let mut r2 = Self::ZERO;
        loop {
            // Extract the k-bit window ending at bit i of digit j.
            let mut w = if i as usize >= k1 {
                ((exponent.digits[j as usize] >> (i as usize - k1)) as usize) & km
            } else {
                let mut w = ((exponent.digits[j as usize] & ((1u32 << (i + 1)) - 1)) as usize)
                    << (k1 - i as usize);
                if j > 0 {
                    w |= (exponent.digits[j as usize - 1] >> (DB - k1 + i as usize)) as usize;
                }
                w
            };

            // Drop the window's trailing zero bits; those positions square
            // directly below.
            let mut n = k;
            while w & 1 == 0 {
                w >>= 1;
                n -= 1;
            }
            i -= n as isize;
            if i < 0 {
                i += DB as isize;
                j -= 1;
            }

            if first {
                // The accumulator is still one, the window value stands.
                r = g[w].clone();
                first = false;
            } else {
                while n > 1 {
                    z.sqr_to(&r, &mut r2);
                    z.sqr_to(&r2, &mut r);
                    n -= 2;
                }
                if n > 0 {
                    z.sqr_to(&r, &mut r2);
                } else {
                    std::mem::swap(&mut r, &mut r2);
                }
                z.mul_to(&r2, &g[w], &mut r);
            }

            // Square across runs of zero exponent bits.
            while j >= 0 && exponent.digits[j as usize] & (1u32 << i) == 0 {
                z.sqr_to(&r, &mut r2);
                std::mem::swap(&mut r, &mut r2);
                i -= 1;
                if i < 0 {
                    i = DB as isize - 1;
                    j -= 1;
                }
            }
            if j < 0 {
                break;
            }
        }
        Ok(z.revert(&r))
    }

    /// `self ^ exponent mod modulus` for a small exponent, by plain
    /// square-and-multiply (HAC 14.79). Montgomery only pays off past a
    /// few hundred squarings, so tiny exponents and even moduli use
    /// Classic.
    pub fn mod_pow_digit(&self, exponent: u32, modulus: &Self) -> Result<Self, ModPowError> {
        if modulus.signum() <= 0 {
            return Err(ModPowError::NonPositiveModulus);
        }
        if exponent == 0 {
            return Ok(Self::one().modulo_unchecked(modulus));
        }
        let z = if exponent < 256 || modulus.is_even() {
            Reducer::Classic(Classic::new(modulus)?)
        } else {
            Reducer::Montgomery(Montgomery::new(modulus)?)
        };
        Ok(self.exp_with(exponent, &z))
    }

    /// `self ^ exponent`, exact.
    pub fn pow(&self, exponent: u32) -> Self {
        self.exp_with(exponent, &Reducer::Null(Null))
    }

    /// Left-to-right binary exponentiation through a reduction strategy.
    fn exp_with(&self, exponent: u32, z: &Reducer) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let mut r = z.convert(self);
        let g = r.clone();
        let mut r2 = Self::ZERO;
        let bits = 32 - exponent.leading_zeros() as usize;
        for i in (0..bits - 1).rev() {
            z.sqr_to(&r, &mut r2);
            if exponent & (1u32 << i) != 0 {
                z.mul_to(&r2, &g, &mut r);
            } else {
                std::mem::swap(&mut r, &mut r2);
            }
        }
        z.revert(&r)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn spec_example() {
        let result = BigNumber::from(4).mod_pow(&BigNumber::from(13), &BigNumber::from(497)).unwrap();
        assert_eq!(result, BigNumber::from(445));
    }

    #[rstest]
    #[case(2, 10, 1000, 24)]
    #[case(5, 117, 19, 1)]
    #[case(7, 0, 13, 1)]
    #[case(7, 0, 1, 0)]
    #[case(0, 5, 13, 0)]
    #[case(12345, 1, 100, 45)]
    fn small_values(#[case] base: i64, #[case] exponent: i64, #[case] modulus: i64, #[case] expected: i64) {
        let result = BigNumber::from(base)
            .mod_pow(&BigNumber::from(exponent), &BigNumber::from(modulus))
            .unwrap();
        assert_eq!(result, BigNumber::from(expected));
    }

    #[test]
    fn negative_base() {
        // (-2)^3 mod 9 = -8 mod 9 = 1
        let result = BigNumber::from(-2).mod_pow(&BigNumber::from(3), &BigNumber::from(9)).unwrap();
        assert_eq!(result, BigNumber::from(1));
    }

    #[test]
    fn rejects_bad_arguments() {
        let one = BigNumber::one();
        assert_eq!(
            one.mod_pow(&one, &BigNumber::ZERO),
            Err(ModPowError::NonPositiveModulus)
        );
        assert_eq!(
            one.mod_pow(&one, &BigNumber::from(-3)),
            Err(ModPowError::NonPositiveModulus)
        );
        assert_eq!(
            one.mod_pow(&BigNumber::from(-1), &BigNumber::from(5)),
            Err(ModPowError::NegativeExponent)
        );
    }

    #[test]
    fn matches_reference_for_odd_and_even_moduli() {
        let mut rng = StdRng::seed_from_u64(70);
        // Exponent sizes straddling every window-size breakpoint.
        for exponent_bits in [4, 17, 40, 100, 500, 900] {
            for modulus_odd in [true, false] {
                let base = BigNumber::random_bits(256, &mut rng);
                let exponent = BigNumber::random_bits(exponent_bits, &mut rng);
                let mut modulus = BigNumber::random_bits(192, &mut rng).set_bit(191);
                modulus = if modulus_odd { modulus.set_bit(0) } else { modulus.clear_bit(0) };
                let result = base.mod_pow(&exponent, &modulus).unwrap();
                let expected = BigInt::from(&base).modpow(&BigInt::from(&exponent), &BigInt::from(&modulus));
                assert_eq!(BigInt::from(&result), expected, "exponent_bits={exponent_bits} odd={modulus_odd}");
            }
        }
    }

    #[test]
    fn digit_exponent_path_matches_general() {
        let mut rng = StdRng::seed_from_u64(71);
        let base = BigNumber::random_bits(200, &mut rng);
        let modulus = BigNumber::random_bits(128, &mut rng).set_bit(127).set_bit(0);
        for exponent in [1u32, 2, 3, 255, 256, 65537] {
            let via_digit = base.mod_pow_digit(exponent, &modulus).unwrap();
            let via_general = base.mod_pow(&BigNumber::from(exponent), &modulus).unwrap();
            assert_eq!(via_digit, via_general);
        }
    }

    #[rstest]
    #[case(3, 0, 1)]
    #[case(3, 1, 3)]
    #[case(3, 7, 2187)]
    #[case(10, 9, 1_000_000_000)]
    fn plain_pow(#[case] base: i64, #[case] exponent: u32, #[case] expected: i64) {
        assert_eq!(BigNumber::from(base).pow(exponent), BigNumber::from(expected));
    }

    #[test]
    fn plain_pow_grows_past_native_width() {
        assert_eq!(BigNumber::from(2).pow(200), BigNumber::one() << 200);
    }

    #[test]
    fn pow_of_negative_base() {
        assert_eq!(BigNumber::from(-3).pow(2), BigNumber::from(9));
        assert_eq!(BigNumber::from(-3).pow(3), BigNumber::from(-27));
    }
}
