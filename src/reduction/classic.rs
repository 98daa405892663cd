//! Plain division-remainder reduction.

use crate::{bignum::BigNumber, errors::UnsuitableModulus};

/// Reduction by division: the internal representation is the value itself
/// reduced into `[0, m)`.
pub struct Classic {
    modulus: BigNumber,
}

impl Classic {
    /// Bind to a positive modulus.
    pub fn new(modulus: &BigNumber) -> Result<Self, UnsuitableModulus> {
        if modulus.signum() <= 0 {
            return Err(UnsuitableModulus::NonPositive);
        }
        Ok(Self { modulus: modulus.clone() })
    }

    /// Reduce into `[0, m)`.
    pub fn convert(&self, x: &BigNumber) -> BigNumber {
        if x.signum() < 0 || x >= &self.modulus {
            x.modulo_unchecked(&self.modulus)
        } else {
            x.clone()
        }
    }

    /// Identity; the internal representation is ordinary.
    pub fn revert(&self, x: &BigNumber) -> BigNumber {
        x.clone()
    }

    /// Division-remainder, in place.
    pub fn reduce(&self, x: &mut BigNumber) {
        *x = x.rem_unchecked(&self.modulus);
    }
}
