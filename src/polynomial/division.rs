//! Polynomial long division over a dense coefficient arena

use log::trace;

use super::Polynomial;
use crate::error::{PolynomialError, PolynomialResult};
use crate::monomial::Monomial;

impl Polynomial {
    /// Fails on the first constant-of-integration term
    pub(crate) fn ensure_concrete(&self) -> PolynomialResult<()> {
        match self.terms.iter().find(|term| term.is_symbolic()) {
            Some(term) => Err(PolynomialError::IndeterminateCoefficient {
                exponent: term.exponent(),
            }),
            None => Ok(()),
        }
    }

    /// Coefficients indexed by exponent, `0..=degree`
    ///
    /// Missing exponents hold explicit zeros. The arena length is always
    /// `degree + 1`, however few terms are stored.
    pub fn dense_coefficients(&self) -> PolynomialResult<Vec<f64>> {
        self.ensure_concrete()?;
        let mut arena = vec![0.0; self.degree() as usize + 1];
        for term in &self.terms {
            if let Monomial::Concrete { coefficient, exponent } = *term {
                if coefficient != 0.0 {
                    arena[exponent as usize] = coefficient;
                }
            }
        }
        Ok(arena)
    }

    /// Returns the polynomial with one term for every exponent from the
    /// degree down to 0
    pub fn densify(&self) -> PolynomialResult<Polynomial> {
        Ok(Self::from_dense(&self.dense_coefficients()?))
    }

    /// Builds a polynomial from an arena indexed by exponent
    pub(crate) fn from_dense(arena: &[f64]) -> Polynomial {
        let terms: Vec<Monomial> = arena
            .iter()
            .enumerate()
            .rev()
            .map(|(exponent, &coefficient)| Monomial::new(coefficient, exponent as u32))
            .collect();
        Polynomial::new(terms)
    }

    /// Quotient of `self / divisor`
    pub fn divide(&self, divisor: &Polynomial) -> PolynomialResult<Polynomial> {
        long_division(self, divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of `self / divisor`
    pub fn modulo(&self, divisor: &Polynomial) -> PolynomialResult<Polynomial> {
        long_division(self, divisor).map(|(_, remainder)| remainder)
    }

    /// Quotient and remainder in one pass
    pub fn div_rem(&self, divisor: &Polynomial) -> PolynomialResult<(Polynomial, Polynomial)> {
        long_division(self, divisor)
    }
}

/// Euclidean division of `dividend` by `divisor`, returning
/// `(quotient, remainder)` with `deg(remainder) < deg(divisor)`.
///
/// When the dividend has a lower degree than the divisor the quotient is
/// zero and the dividend is returned unchanged as the remainder.
pub fn long_division(
    dividend: &Polynomial,
    divisor: &Polynomial,
) -> PolynomialResult<(Polynomial, Polynomial)> {
    if divisor.is_zero() {
        return Err(PolynomialError::DivisionByZeroPolynomial);
    }
    let divisor_dense = divisor.dense_coefficients()?;
    let mut work = dividend.dense_coefficients()?;

    let divisor_degree = divisor_dense.len() - 1;
    let dividend_degree = work.len() - 1;
    if dividend_degree < divisor_degree {
        trace!(
            "degree {} below divisor degree {}, nothing to divide",
            dividend_degree,
            divisor_degree
        );
        return Ok((Polynomial::zero(), dividend.clone()));
    }

    let shift = dividend_degree - divisor_degree;
    let leading = divisor_dense[divisor_degree];
    trace!("dividing ({}) by ({}), shift {}", dividend, divisor, shift);

    let mut quotient = vec![0.0; shift + 1];
    for offset in (0..=shift).rev() {
        let top = offset + divisor_degree;
        let factor = work[top] / leading;
        quotient[offset] = factor;
        for (exponent, coefficient) in divisor_dense.iter().enumerate() {
            work[exponent + offset] -= coefficient * factor;
        }
        // Eliminated exactly, whatever the rounding left behind
        work[top] = 0.0;
    }

    let mut quotient = Polynomial::from_dense(&quotient);
    quotient.drop_zero_terms();
    let mut remainder = Polynomial::from_dense(&work);
    remainder.drop_zero_terms();
    Ok((quotient, remainder))
}
