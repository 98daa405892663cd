//! Construction of random values and probable primes.

use super::BigNumber;
use crate::errors::InvalidBitLength;
use rand::{CryptoRng, RngCore};

impl BigNumber {
    /// A uniformly random value in `[0, 2^bits)` drawn from `rng`.
    pub fn random_bits<R>(bits: usize, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if bits == 0 {
            return Self::ZERO;
        }
        // The leading zero byte keeps the decoder from reading the top bit
        // as a sign.
        let mut bytes = vec![0u8; (bits + 7) / 8 + 1];
        rng.fill_bytes(&mut bytes[1..]);
        let partial = bits % 8;
        if partial > 0 {
            bytes[1] &= (1u8 << partial) - 1;
        }
        Self::from_signed_bytes_be(&bytes)
    }

    /// A probable prime of exactly `bits` bits (top bit set), tested to the
    /// given certainty.
    ///
    /// The candidate is drawn from `rng`, made odd, and stepped by two
    /// until the primality test passes; a step that overflows the requested
    /// bit length pulls the candidate back into range.
    pub fn probable_prime<R>(bits: usize, certainty: u32, rng: &mut R) -> Result<Self, InvalidBitLength>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if bits < 2 {
            return Err(InvalidBitLength(bits));
        }
        let top = BigNumber::one() << (bits - 1);
        let mut n = Self::random_bits(bits, rng);
        if !n.test_bit(bits - 1) {
            n = &n | &top;
        }
        if n.is_even() {
            n.d_add_offset(1, 0);
        }
        while !n.is_probable_prime(certainty, rng) {
            n.d_add_offset(2, 0);
            if n.bit_length() > bits {
                n = &n - &top;
            }
        }
        Ok(n)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(8)]
    #[case(33)]
    #[case(257)]
    fn random_values_stay_in_range(#[case] bits: usize) {
        let mut rng = StdRng::seed_from_u64(30);
        let bound = BigNumber::one() << bits;
        for _ in 0..20 {
            let n = BigNumber::random_bits(bits, &mut rng);
            assert!(n.signum() >= 0);
            assert!(n < bound);
        }
    }

    #[test]
    fn random_values_are_deterministic_per_seed() {
        let mut first = StdRng::seed_from_u64(31);
        let mut second = StdRng::seed_from_u64(31);
        assert_eq!(
            BigNumber::random_bits(100, &mut first),
            BigNumber::random_bits(100, &mut second)
        );
    }

    #[test]
    fn random_values_fill_the_top_digit() {
        // With 20 draws of 64 bits, the top half being all zero every time
        // would mean the mask is off.
        let mut rng = StdRng::seed_from_u64(32);
        let any_high = (0..20)
            .map(|_| BigNumber::random_bits(64, &mut rng))
            .any(|n| n.bit_length() > 32);
        assert!(any_high);
    }

    #[rstest]
    #[case(2)]
    #[case(16)]
    #[case(64)]
    #[case(128)]
    fn generated_primes_have_exact_bit_length(#[case] bits: usize) {
        let mut rng = StdRng::seed_from_u64(33);
        let p = BigNumber::probable_prime(bits, 20, &mut rng).unwrap();
        assert_eq!(p.bit_length(), bits);
        assert!(p.is_probable_prime(20, &mut rng));
    }

    #[test]
    fn tiny_bit_lengths_are_rejected() {
        let mut rng = StdRng::seed_from_u64(34);
        assert_eq!(BigNumber::probable_prime(1, 10, &mut rng), Err(InvalidBitLength(1)));
        assert_eq!(BigNumber::probable_prime(0, 10, &mut rng), Err(InvalidBitLength(0)));
    }
}
