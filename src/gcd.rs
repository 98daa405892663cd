//! Greatest common divisor and modular inverse.

use crate::{bignum::BigNumber, errors::InverseError};

impl BigNumber {
    /// Greatest common divisor of the two magnitudes (binary GCD,
    /// HAC 14.54). Always non-negative; `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut x = self.abs();
        let mut y = other.abs();
        if x < y {
            std::mem::swap(&mut x, &mut y);
        }
        let mut g = match y.lowest_set_bit() {
            None => return x,
            Some(g) => g,
        };
        if let Some(i) = x.lowest_set_bit() {
            if i < g {
                g = i;
            }
        }
        // Strip the shared power of two, halve and subtract, restore it.
        if g > 0 {
            x = &x >> g;
            y = &y >> g;
        }
        while x.signum() > 0 {
            if let Some(i) = x.lowest_set_bit() {
                if i > 0 {
                    x = &x >> i;
                }
            }
            if let Some(i) = y.lowest_set_bit() {
                if i > 0 {
                    y = &y >> i;
                }
            }
            if x >= y {
                x = &x - &y;
                x = &x >> 1;
            } else {
                y = &y - &x;
                y = &y >> 1;
            }
        }
        if g > 0 {
            y = &y << g;
        }
        y
    }

    /// The inverse of this value modulo positive `m`, in `[0, m)` (binary
    /// extended Euclid, HAC 14.61, including the even-modulus branch).
    ///
    /// Values sharing a factor with the modulus have no inverse, which is
    /// an explicit error rather than an ambiguous zero.
    pub fn mod_inverse(&self, m: &Self) -> Result<Self, InverseError> {
        if m.signum() <= 0 {
            return Err(InverseError::NonPositiveModulus);
        }
        let even_modulus = m.is_even();
        let v0 = self.modulo_unchecked(m);
        if v0.is_zero() || (v0.is_even() && even_modulus) {
            return Err(InverseError::NotInvertible);
        }
        let mut u = m.clone();
        let mut v = v0.clone();
        let mut a = Self::one();
        let mut b = Self::ZERO;
        let mut c = Self::ZERO;
        let mut d = Self::one();
        while u.signum() != 0 {
            while u.is_even() {
                u = &u >> 1;
                if even_modulus {
                    if !a.is_even() || !b.is_even() {
                        a = &a + &v0;
                        b = &b - m;
                    }
                    a = &a >> 1;
                } else if !b.is_even() {
                    b = &b - m;
                }
                b = &b >> 1;
            }
            while v.is_even() {
                v = &v >> 1;
                if even_modulus {
                    if !c.is_even() || !d.is_even() {
                        c = &c + &v0;
                        d = &d - m;
                    }
                    c = &c >> 1;
                } else if !d.is_even() {
                    d = &d - m;
                }
                d = &d >> 1;
            }
            if u >= v {
                u = &u - &v;
                if even_modulus {
                    a = &a - &c;
                }
                b = &b - &d;
            } else {
                v = &v - &u;
                if even_modulus {
                    c = &c - &a;
                }
                d = &d - &b;
            }
        }
        if !v.is_one() {
            return Err(InverseError::NotInvertible);
        }
        if d >= *m {
            return Ok(&d - m);
        }
        if d.signum() >= 0 {
            return Ok(d);
        }
        let d = &d + m;
        if d.signum() < 0 {
            Ok(&d + m)
        } else {
            Ok(d)
        }
    }
}
