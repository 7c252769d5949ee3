use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::monomial::Monomial;

mod calculus;
mod division;
mod gcd;

pub use division::long_division;

/// Represents a univariate polynomial with `f64` coefficients
///
/// Terms are kept in normalized form: sorted by strictly decreasing
/// exponent, with like terms merged. Zero-coefficient terms survive
/// normalization until `drop_zero_terms` is called. There is always at
/// least one term; the zero polynomial is `0 * x^0`.
#[derive(Clone, Debug)]
pub struct Polynomial {
    terms: Vec<Monomial>,
}

impl Polynomial {
    /// Creates a new polynomial from its terms, merging like terms
    pub fn new(terms: Vec<Monomial>) -> Self {
        let mut poly = Self { terms };
        if poly.terms.is_empty() {
            poly.terms.push(Monomial::default());
        }
        poly.combine();
        poly
    }

    /// Creates a polynomial from `(coefficient, exponent)` pairs
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Self {
        pairs.iter().copied().map(Monomial::from).collect()
    }

    /// Creates a zero polynomial
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    pub fn one() -> Self {
        Self::constant(1.0)
    }

    pub fn constant(value: f64) -> Self {
        Self::from(Monomial::constant(value))
    }

    /// Returns the terms in descending exponent order
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Number of stored terms, zero-coefficient terms included
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns the exponent of the highest nonzero term
    pub fn degree(&self) -> u32 {
        self.leading_term().exponent()
    }

    /// Highest nonzero term, or `0 * x^0` for the zero polynomial
    pub fn leading_term(&self) -> Monomial {
        self.nonzero_terms().next().copied().unwrap_or_default()
    }

    /// Coefficient of the leading term, `None` when it is symbolic
    pub fn leading_coefficient(&self) -> Option<f64> {
        self.leading_term().coefficient()
    }

    /// Returns true if this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(Monomial::is_zero)
    }

    pub fn has_symbolic_constant(&self) -> bool {
        self.terms.iter().any(Monomial::is_symbolic)
    }

    /// Removes every constant-of-integration term
    pub fn without_symbolic_constant(&self) -> Self {
        self.terms
            .iter()
            .filter(|term| !term.is_symbolic())
            .copied()
            .collect()
    }

    /// Sorts terms by descending exponent and merges equal exponents
    pub fn combine(&mut self) {
        self.terms
            .sort_by(|a, b| b.exponent().cmp(&a.exponent()));

        let mut merged: Vec<Monomial> = Vec::with_capacity(self.terms.len());
        for term in std::mem::take(&mut self.terms) {
            match merged.last_mut() {
                Some(last) if last.exponent() == term.exponent() => *last = last.merge(term),
                _ => merged.push(term),
            }
        }
        self.terms = merged;
    }

    /// Combines, then removes zero-coefficient terms. The zero polynomial
    /// keeps its single `0 * x^0` term.
    pub fn drop_zero_terms(&mut self) {
        self.combine();
        self.terms.retain(|term| !term.is_zero());
        if self.terms.is_empty() {
            self.terms.push(Monomial::default());
        }
    }

    pub fn add_term(&mut self, term: Monomial) {
        self.terms.push(term);
        self.combine();
    }

    pub fn add_coefficient(&mut self, coefficient: f64, exponent: u32) {
        self.add_term(Monomial::new(coefficient, exponent));
    }

    /// Sum of every term evaluated at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.evaluate(x)).sum()
    }

    /// `evaluate(end) - evaluate(start)`, with a bare constant of
    /// integration cancelling out
    pub fn definite_value(&self, start: f64, end: f64) -> f64 {
        self.terms
            .iter()
            .map(|term| term.definite_value(start, end))
            .sum()
    }

    /// Writes the polynomial to stdout
    pub fn render(&self) {
        println!("{}", self);
    }

    fn nonzero_terms(&self) -> impl Iterator<Item = &Monomial> {
        self.terms.iter().filter(|term| !term.is_zero())
    }

    /// Pairs up terms of both polynomials by exponent, filling gaps with
    /// zero terms
    fn aligned_terms(&self, other: &Self) -> Vec<(Monomial, Monomial)> {
        let mut lhs = self.nonzero_terms().peekable();
        let mut rhs = other.nonzero_terms().peekable();
        let mut pairs = Vec::new();
        loop {
            let pair = match (lhs.peek().copied().copied(), rhs.peek().copied().copied()) {
                (None, None) => break,
                (Some(a), None) => {
                    lhs.next();
                    (a, Monomial::new(0.0, a.exponent()))
                }
                (None, Some(b)) => {
                    rhs.next();
                    (Monomial::new(0.0, b.exponent()), b)
                }
                (Some(a), Some(b)) => {
                    if a.exponent() > b.exponent() {
                        lhs.next();
                        (a, Monomial::new(0.0, a.exponent()))
                    } else if a.exponent() < b.exponent() {
                        rhs.next();
                        (Monomial::new(0.0, b.exponent()), b)
                    } else {
                        lhs.next();
                        rhs.next();
                        (a, b)
                    }
                }
            };
            pairs.push(pair);
        }
        pairs
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Monomial> for Polynomial {
    fn from(term: Monomial) -> Self {
        Self { terms: vec![term] }
    }
}

impl From<Vec<Monomial>> for Polynomial {
    fn from(terms: Vec<Monomial>) -> Self {
        Self::new(terms)
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Equality is algebraic: zero-coefficient terms are ignored.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.nonzero_terms().eq(other.nonzero_terms())
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self.terms.iter().map(|term| -*term).collect()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a> Add for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        self.terms.iter().chain(other.terms.iter()).copied().collect()
    }
}

impl<'a> Sub for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Self::Output {
        self.terms
            .iter()
            .copied()
            .chain(other.terms.iter().map(|term| -*term))
            .collect()
    }
}

impl<'a> Mul for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Self::Output {
        self.terms
            .iter()
            .flat_map(|a| other.terms.iter().map(move |b| *a * *b))
            .collect()
    }
}

impl<'a> Add<Monomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, term: Monomial) -> Self::Output {
        let mut result = self.clone();
        result.add_term(term);
        result
    }
}

impl<'a> Sub<Monomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, term: Monomial) -> Self::Output {
        self + (-term)
    }
}

impl<'a> Mul<Monomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, term: Monomial) -> Self::Output {
        self.terms.iter().map(|t| *t * term).collect()
    }
}

impl<'a> Mul<f64> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, factor: f64) -> Self::Output {
        self * Monomial::constant(factor)
    }
}

// Owned operands forward to the reference impls
macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident, $rhs:ty) => {
        impl $imp<$rhs> for Polynomial {
            type Output = Polynomial;

            fn $method(self, other: $rhs) -> Self::Output {
                (&self).$method(other)
            }
        }
    };
}

forward_owned_binop!(Add, add, &Polynomial);
forward_owned_binop!(Sub, sub, &Polynomial);
forward_owned_binop!(Mul, mul, &Polynomial);
forward_owned_binop!(Add, add, Monomial);
forward_owned_binop!(Sub, sub, Monomial);
forward_owned_binop!(Mul, mul, Monomial);
forward_owned_binop!(Mul, mul, f64);

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Self::Output {
        &self + &other
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Self::Output {
        &self - &other
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Self::Output {
        &self * &other
    }
}

impl num_traits::Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        self.terms.iter().all(Monomial::is_zero)
    }
}

impl num_traits::One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let single = self.terms.len() == 1;
        let mut written = false;
        for term in &self.terms {
            if term.is_zero() && !single {
                continue;
            }
            if written && term.is_positive() {
                write!(f, "+")?;
            }
            write!(f, "{}", term)?;
            written = true;
        }
        // Every term was a dropped zero
        if !written {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Polynomial {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.aligned_terms(other)
            .iter()
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Polynomial {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.aligned_terms(other)
            .iter()
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
