//! Euclidean GCD and LCM

use log::{debug, trace};

use super::Polynomial;
use crate::error::PolynomialResult;

impl Polynomial {
    /// Greatest common divisor by the Euclidean algorithm
    ///
    /// Coprime operands give the constant `1`. Otherwise the last nonzero
    /// remainder is scaled by `1 / lc(other)`, the leading coefficient of
    /// the second operand as passed in, not of the final iterate.
    /// `gcd(a, 0)` is `a` unscaled.
    pub fn gcd(&self, other: &Polynomial) -> PolynomialResult<Polynomial> {
        self.ensure_concrete()?;
        other.ensure_concrete()?;

        let mut a = self.clone();
        a.drop_zero_terms();
        let mut b = other.clone();
        b.drop_zero_terms();

        let scale = match b.leading_coefficient() {
            Some(leading) if leading != 0.0 => 1.0 / leading,
            _ => {
                debug!("gcd with the zero polynomial, returning ({})", a);
                return Ok(a);
            }
        };

        let mut iterations = 0usize;
        while b.degree() != 0 {
            let remainder = a.modulo(&b)?;
            a = b;
            b = remainder;
            iterations += 1;
            trace!("euclid step {}: a = ({}), b = ({})", iterations, a, b);
        }

        if !b.is_zero() {
            debug!("operands are coprime after {} steps", iterations);
            return Ok(Polynomial::one());
        }
        let gcd = &a * scale;
        debug!("gcd ({}) after {} steps", gcd, iterations);
        Ok(gcd)
    }

    /// Least common multiple, `(self * other) / gcd(self, other)`
    ///
    /// The lcm with the zero polynomial is zero, `lcm(0, 0)` included.
    pub fn lcm(&self, other: &Polynomial) -> PolynomialResult<Polynomial> {
        let gcd = self.gcd(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(Polynomial::zero());
        }
        (other * self).divide(&gcd)
    }
}
