//! Arithmetic-layer errors.

use super::error_code::{self, CritlineErrorCode};

/// Failures inside the fixed-point arithmetic and the zeta evaluator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    #[error("unsupported precision: {digits} digits (supported {min}..={max})")]
    UnsupportedPrecision { digits: u32, min: u32, max: u32 },

    #[error("non-finite input: {value}")]
    NonFinite { value: f64 },

    #[error("division by zero in {context}")]
    DivisionByZero { context: &'static str },

    #[error("argument outside the domain of {context}")]
    Domain { context: &'static str },

    #[error("overflow in {context}")]
    Overflow { context: &'static str },

    #[error("pole of zeta at s = 1")]
    Pole,

    #[error("series did not converge in {context} after {iterations} terms")]
    NoConvergence { context: &'static str, iterations: usize },

    #[error("evaluation needs {required} terms, limit is {limit}")]
    TooManyTerms { required: u64, limit: u64 },
}

impl CritlineErrorCode for NumericError {
    fn error_code(&self) -> &'static str {
        error_code::NUMERIC_EVALUATION_FAILURE
    }
}
