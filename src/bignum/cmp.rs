//! Total order over the infinite two's-complement view.

use super::{BigNumber, Sign};
use std::cmp::Ordering;

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::NonNegative) => return Ordering::Less,
            (Sign::NonNegative, Sign::Negative) => return Ordering::Greater,
            _ => {}
        }
        // More digits means larger magnitude; for negatives that is the
        // smaller value.
        let by_len = self.digits.len().cmp(&other.digits.len());
        let by_len = match self.sign {
            Sign::Negative => by_len.reverse(),
            Sign::NonNegative => by_len,
        };
        if by_len != Ordering::Equal {
            return by_len;
        }
        // Equal length: digit-wise most-significant-first unsigned compare
        // is correct for both signs under two's complement.
        for i in (0..self.digits.len()).rev() {
            match self.digits[i].cmp(&other.digits[i]) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, Ordering::Equal)]
    #[case(0, 1, Ordering::Less)]
    #[case(1, 0, Ordering::Greater)]
    #[case(-1, 0, Ordering::Less)]
    #[case(-1, -2, Ordering::Greater)]
    #[case(-2, -1, Ordering::Less)]
    #[case(i64::MIN, i64::MAX, Ordering::Less)]
    #[case(1 << 40, 1, Ordering::Greater)]
    #[case(-(1 << 40), -1, Ordering::Less)]
    #[case(42, 42, Ordering::Equal)]
    #[case(-42, -42, Ordering::Equal)]
    fn ordering(#[case] left: i64, #[case] right: i64, #[case] expected: Ordering) {
        let left = BigNumber::from(left);
        let right = BigNumber::from(right);
        assert_eq!(left.cmp(&right), expected);
    }

    #[test]
    fn min_max() {
        let a = BigNumber::from(-5);
        let b = BigNumber::from(3);
        assert_eq!(a.clone().min(b.clone()), a);
        assert_eq!(a.max(b.clone()), b);
    }
}
