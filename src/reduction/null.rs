//! The identity "reduction" for plain exponentiation.

use crate::bignum::BigNumber;

/// No-op reduction: convert and revert are the identity and nothing is
/// ever reduced.
#[derive(Default)]
pub struct Null;

impl Null {
    /// Identity.
    pub fn convert(&self, x: &BigNumber) -> BigNumber {
        x.clone()
    }

    /// Identity.
    pub fn revert(&self, x: &BigNumber) -> BigNumber {
        x.clone()
    }

    /// No-op.
    pub fn reduce(&self, _x: &mut BigNumber) {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn everything_is_identity() {
        let z = Null;
        let x = BigNumber::from(12345);
        assert_eq!(z.convert(&x), x);
        assert_eq!(z.revert(&x), x);
        let mut y = x.clone();
        z.reduce(&mut y);
        assert_eq!(y, x);
    }
}
