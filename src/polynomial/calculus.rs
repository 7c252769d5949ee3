//! Power-rule antiderivatives and derivatives

use super::Polynomial;
use crate::monomial::Monomial;

impl Polynomial {
    /// Applies `n` antiderivative steps to every term, then appends the
    /// constant of integration `C`
    pub fn shift_up(&self, n: u32) -> Polynomial {
        if n == 0 {
            return self.clone();
        }
        self.terms
            .iter()
            .map(|term| term.shift_up(n))
            .chain(std::iter::once(Monomial::constant_of_integration()))
            .collect()
    }

    /// Applies `n` derivative steps to every term. Constants shift down to
    /// explicit zero terms rather than disappearing.
    pub fn shift_down(&self, n: u32) -> Polynomial {
        self.terms.iter().map(|term| term.shift_down(n)).collect()
    }

    /// Indefinite integral, `C` included
    pub fn integral(&self) -> Polynomial {
        self.shift_up(1)
    }

    /// Definite integral over `[start, end]`
    ///
    /// Zero terms are dropped before integrating, so no constant of
    /// integration ever enters the sum.
    pub fn definite_integral(&self, start: f64, end: f64) -> f64 {
        self.terms
            .iter()
            .filter(|term| !term.is_zero())
            .map(|term| term.shift_up(1).definite_value(start, end))
            .sum()
    }

    pub fn derivative(&self) -> Polynomial {
        self.shift_down(1)
    }
}
