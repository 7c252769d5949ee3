/// Error types for polynomial operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolynomialError {
    #[error("Division by the zero polynomial")]
    DivisionByZeroPolynomial,

    #[error("Indeterminate coefficient at x^{exponent} cannot be divided")]
    IndeterminateCoefficient { exponent: u32 },
}

/// Result type for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
