//! Modular reduction strategies.
//!
//! Each strategy binds to one modulus at construction, precomputing
//! whatever that modulus shape allows, and then multiplies and squares in
//! an internal representation without a full division per step. Contexts
//! are immutable after construction and freely shareable.

pub mod barrett;
pub mod classic;
pub mod montgomery;
pub mod null;

pub use barrett::Barrett;
pub use classic::Classic;
pub use montgomery::Montgomery;
pub use null::Null;

use crate::{bignum::BigNumber, errors::UnsuitableModulus};

/// A reduction strategy bound to one modulus.
///
/// The variant is chosen once at modulus-bind time and carried explicitly:
/// Montgomery is only valid for odd moduli, Barrett covers the even ones,
/// and Classic serves tiny exponents where precomputation does not pay off.
pub enum Reducer {
    /// Plain division-remainder reduction.
    Classic(Classic),

    /// Montgomery-form reduction for odd moduli.
    Montgomery(Montgomery),

    /// Barrett reduction for even moduli.
    Barrett(Barrett),

    /// No reduction; plain arithmetic.
    Null(Null),
}

impl Reducer {
    /// Select the strategy for a modulus and the bit length of the
    /// exponent it will serve.
    pub fn for_modulus(modulus: &BigNumber, exponent_bits: usize) -> Result<Self, UnsuitableModulus> {
        if exponent_bits < 8 {
            Ok(Reducer::Classic(Classic::new(modulus)?))
        } else if modulus.is_even() {
            Ok(Reducer::Barrett(Barrett::new(modulus)?))
        } else {
            Ok(Reducer::Montgomery(Montgomery::new(modulus)?))
        }
    }

    /// Map a value into the strategy's internal representation.
    pub fn convert(&self, x: &BigNumber) -> BigNumber {
        match self {
            Reducer::Classic(z) => z.convert(x),
            Reducer::Montgomery(z) => z.convert(x),
            Reducer::Barrett(z) => z.convert(x),
            Reducer::Null(z) => z.convert(x),
        }
    }

    /// Map a value back out of the internal representation.
    pub fn revert(&self, x: &BigNumber) -> BigNumber {
        match self {
            Reducer::Classic(z) => z.revert(x),
            Reducer::Montgomery(z) => z.revert(x),
            Reducer::Barrett(z) => z.revert(x),
            Reducer::Null(z) => z.revert(x),
        }
    }

    /// Reduce an internal-representation value in place.
    pub fn reduce(&self, x: &mut BigNumber) {
        match self {
            Reducer::Classic(z) => z.reduce(x),
            Reducer::Montgomery(z) => z.reduce(x),
            Reducer::Barrett(z) => z.reduce(x),
            Reducer::Null(z) => z.reduce(x),
        }
    }

    /// `out = x * y`, reduced; `out` must not alias an input.
    pub fn mul_to(&self, x: &BigNumber, y: &BigNumber, out: &mut BigNumber) {
        *out = x * y;
        self.reduce(out);
    }

    /// `out = x^2`, reduced; `out` must not alias `x`.
    pub fn sqr_to(&self, x: &BigNumber, out: &mut BigNumber) {
        *out = x.square();
        self.reduce(out);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn selection_policy() {
        let odd = BigNumber::from(1_000_003);
        let even = BigNumber::from(1_000_006);
        assert!(matches!(Reducer::for_modulus(&odd, 4).unwrap(), Reducer::Classic(_)));
        assert!(matches!(Reducer::for_modulus(&odd, 64).unwrap(), Reducer::Montgomery(_)));
        assert!(matches!(Reducer::for_modulus(&even, 64).unwrap(), Reducer::Barrett(_)));
    }

    #[test]
    fn selection_rejects_non_positive_modulus() {
        for modulus in [BigNumber::ZERO, BigNumber::from(-7)] {
            assert!(Reducer::for_modulus(&modulus, 64).is_err());
        }
    }

    #[rstest]
    #[case(1_000_003u64)] // odd -> Montgomery
    #[case(1_000_006u64)] // even -> Barrett
    #[case(97u64)]
    fn multiplication_agrees_with_reference(#[case] modulus: u64) {
        let m = BigNumber::from(modulus);
        let mut rng = StdRng::seed_from_u64(40);
        let z = Reducer::for_modulus(&m, 64).unwrap();
        for _ in 0..10 {
            let a = BigNumber::random_bits(150, &mut rng);
            let b = BigNumber::random_bits(150, &mut rng);
            let (ca, cb) = (z.convert(&a), z.convert(&b));
            let mut out = BigNumber::ZERO;
            z.mul_to(&ca, &cb, &mut out);
            let product = z.revert(&out);
            let expected = (BigInt::from(&a) * BigInt::from(&b)) % BigInt::from(modulus);
            assert_eq!(BigInt::from(&product), expected);
        }
    }

    #[test]
    fn strategies_agree_with_each_other() {
        // (a * b) mod m computed via every applicable strategy.
        let mut rng = StdRng::seed_from_u64(41);
        let a = BigNumber::random_bits(400, &mut rng);
        let b = BigNumber::random_bits(400, &mut rng);
        for m in [
            BigNumber::random_bits(256, &mut rng).set_bit(255).set_bit(0), // odd
            BigNumber::random_bits(256, &mut rng).set_bit(255).clear_bit(0), // even
        ] {
            let classic = Reducer::Classic(Classic::new(&m).unwrap());
            let expected = {
                let (ca, cb) = (classic.convert(&a), classic.convert(&b));
                let mut out = BigNumber::ZERO;
                classic.mul_to(&ca, &cb, &mut out);
                classic.revert(&out)
            };
            let fast = Reducer::for_modulus(&m, 64).unwrap();
            let (fa, fb) = (fast.convert(&a), fast.convert(&b));
            let mut out = BigNumber::ZERO;
            fast.mul_to(&fa, &fb, &mut out);
            assert_eq!(fast.revert(&out), expected);
        }
    }
}
