//! Single terms `c * x^e` and the power-rule steps built on them

use std::fmt;
use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};

/// A single polynomial term
///
/// `SymbolicConstant` stands for an unresolved constant of integration
/// (rendered as `C`). It is a term that exists but has no numeric value.
///
/// Exponents saturate at `u32::MAX` instead of overflowing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Monomial {
    Concrete { coefficient: f64, exponent: u32 },
    SymbolicConstant { exponent: u32 },
}

impl Monomial {
    /// Creates the term `coefficient * x^exponent`
    pub fn new(coefficient: f64, exponent: u32) -> Self {
        Monomial::Concrete { coefficient, exponent }
    }

    /// Creates a constant term `c * x^0`
    pub fn constant(coefficient: f64) -> Self {
        Self::new(coefficient, 0)
    }

    /// The bare constant of integration `C`
    pub fn constant_of_integration() -> Self {
        Monomial::SymbolicConstant { exponent: 0 }
    }

    pub fn exponent(&self) -> u32 {
        match *self {
            Monomial::Concrete { exponent, .. } | Monomial::SymbolicConstant { exponent } => {
                exponent
            }
        }
    }

    /// Numeric coefficient, `None` for the symbolic constant
    pub fn coefficient(&self) -> Option<f64> {
        match *self {
            Monomial::Concrete { coefficient, .. } => Some(coefficient),
            Monomial::SymbolicConstant { .. } => None,
        }
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Monomial::SymbolicConstant { .. })
    }

    /// True for a concrete term with a zero coefficient.
    /// The symbolic constant is never zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Monomial::Concrete { coefficient, .. } if *coefficient == 0.0)
    }

    /// Whether the term is printed with a leading `+` after another term.
    /// NaN has no sign of its own and counts as positive.
    pub fn is_positive(&self) -> bool {
        match *self {
            Monomial::Concrete { coefficient, .. } => coefficient > 0.0 || coefficient.is_nan(),
            Monomial::SymbolicConstant { .. } => true,
        }
    }

    /// Flips the sign of the coefficient
    pub fn negate(&self) -> Self {
        -*self
    }

    /// Multiplies two terms: coefficients multiply, exponents add
    pub fn multiply(&self, other: &Monomial) -> Self {
        *self * *other
    }

    /// Scales the coefficient, keeping the exponent
    pub fn scale(&self, factor: f64) -> Self {
        *self * factor
    }

    /// Applies the antiderivative power rule `n` times.
    ///
    /// Integrating the zero constant `0 * x^0` does not give a concrete
    /// zero but the constant of integration, raised `n` times.
    pub fn shift_up(&self, n: u32) -> Self {
        if n == 0 {
            return *self;
        }
        match *self {
            Monomial::Concrete { coefficient, exponent } if coefficient == 0.0 && exponent == 0 => {
                Monomial::SymbolicConstant { exponent: n }
            }
            Monomial::Concrete { mut coefficient, mut exponent } => {
                for _ in 0..n {
                    exponent = exponent.saturating_add(1);
                    coefficient /= f64::from(exponent);
                }
                Monomial::Concrete { coefficient, exponent }
            }
            Monomial::SymbolicConstant { exponent } => Monomial::SymbolicConstant {
                exponent: exponent.saturating_add(n),
            },
        }
    }

    /// Applies the derivative power rule `n` times.
    ///
    /// Once the exponent reaches 0 the term becomes `0 * x^0` and further
    /// steps change nothing.
    pub fn shift_down(&self, n: u32) -> Self {
        match *self {
            Monomial::Concrete { mut coefficient, mut exponent } => {
                for _ in 0..n {
                    if exponent == 0 {
                        coefficient = 0.0;
                        break;
                    }
                    coefficient *= f64::from(exponent);
                    exponent -= 1;
                }
                Monomial::Concrete { coefficient, exponent }
            }
            Monomial::SymbolicConstant { exponent } if n > exponent => Monomial::constant(0.0),
            Monomial::SymbolicConstant { exponent } => Monomial::SymbolicConstant {
                exponent: exponent - n,
            },
        }
    }

    /// Evaluates `c * x^e`; `x^0` is 1 even at `x == 0`.
    /// The symbolic constant has no value and evaluates to NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Monomial::Concrete { coefficient, exponent } => {
                coefficient * num_traits::pow(x, exponent as usize)
            }
            Monomial::SymbolicConstant { .. } => f64::NAN,
        }
    }

    /// `evaluate(end) - evaluate(start)`.
    /// A bare constant of integration cancels to 0.
    pub fn definite_value(&self, start: f64, end: f64) -> f64 {
        match *self {
            Monomial::SymbolicConstant { exponent: 0 } => 0.0,
            _ => self.evaluate(end) - self.evaluate(start),
        }
    }

    /// Writes the term to stdout
    pub fn render(&self) {
        println!("{}", self);
    }

    /// Sums two terms of the same exponent. A symbolic constant absorbs
    /// whatever it is added to.
    pub(crate) fn merge(self, other: Monomial) -> Monomial {
        debug_assert_eq!(self.exponent(), other.exponent());
        match (self, other) {
            (
                Monomial::Concrete { coefficient: a, exponent },
                Monomial::Concrete { coefficient: b, .. },
            ) => Monomial::Concrete {
                coefficient: a + b,
                exponent,
            },
            _ => Monomial::SymbolicConstant {
                exponent: self.exponent(),
            },
        }
    }
}

impl Default for Monomial {
    fn default() -> Self {
        Monomial::constant(0.0)
    }
}

impl From<(f64, u32)> for Monomial {
    fn from((coefficient, exponent): (f64, u32)) -> Self {
        Monomial::new(coefficient, exponent)
    }
}

impl From<f64> for Monomial {
    fn from(coefficient: f64) -> Self {
        Monomial::constant(coefficient)
    }
}

impl Neg for Monomial {
    type Output = Monomial;

    fn neg(self) -> Self::Output {
        match self {
            Monomial::Concrete { coefficient, exponent } => Monomial::Concrete {
                coefficient: -coefficient,
                exponent,
            },
            symbolic => symbolic,
        }
    }
}

impl Mul for Monomial {
    type Output = Monomial;

    fn mul(self, other: Monomial) -> Self::Output {
        let exponent = self.exponent().saturating_add(other.exponent());
        match (self.coefficient(), other.coefficient()) {
            (Some(a), Some(b)) => Monomial::new(a * b, exponent),
            // An arbitrary constant times zero is still zero
            (Some(c), None) | (None, Some(c)) if c == 0.0 => Monomial::new(0.0, exponent),
            _ => Monomial::SymbolicConstant { exponent },
        }
    }
}

impl Mul<f64> for Monomial {
    type Output = Monomial;

    fn mul(self, factor: f64) -> Self::Output {
        self * Monomial::constant(factor)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exponent = self.exponent();
        let nonzero = match *self {
            Monomial::SymbolicConstant { .. } => {
                write!(f, "C")?;
                true
            }
            Monomial::Concrete { coefficient, .. } => {
                if coefficient < 0.0 {
                    write!(f, "-")?;
                }
                let magnitude = coefficient.abs();
                if magnitude != 1.0 || exponent == 0 {
                    write!(f, "{}", magnitude)?;
                }
                coefficient != 0.0
            }
        };
        if exponent == 1 {
            write!(f, "x")?;
        } else if nonzero && exponent > 1 {
            write!(f, "x^{}", exponent)?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Monomial {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        if self.exponent() != other.exponent() {
            return false;
        }
        match (self.coefficient(), other.coefficient()) {
            (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
            (None, None) => true,
            _ => false,
        }
    }
}

impl RelativeEq for Monomial {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        if self.exponent() != other.exponent() {
            return false;
        }
        match (self.coefficient(), other.coefficient()) {
            (Some(a), Some(b)) => a.relative_eq(&b, epsilon, max_relative),
            (None, None) => true,
            _ => false,
        }
    }
}
