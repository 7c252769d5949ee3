//! realpoly: single-variable polynomial algebra over `f64` coefficients
//!
//! Polynomials are kept as sparse, merged lists of monomials sorted by
//! descending exponent. The ring operations, Euclidean division, GCD/LCM
//! and power-rule calculus are all built on per-term monomial operations.

pub mod error;
pub mod monomial;
pub mod polynomial;

// Re-export commonly used types
pub use error::{PolynomialError, PolynomialResult};
pub use monomial::Monomial;
pub use polynomial::{long_division, Polynomial};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
