//! Scan errors.

use super::error_code::{self, CritlineErrorCode};
use super::NumericError;

/// Errors a scan can fail with. A failed scan never carries partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("invalid parameter {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("numeric evaluation failed: {reason}")]
    NumericEvaluationFailure { reason: String },

    #[error("scan cancelled")]
    Cancelled,

    #[error("scan deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded { elapsed_ms: u64 },
}

impl ScanError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<NumericError> for ScanError {
    fn from(e: NumericError) -> Self {
        Self::NumericEvaluationFailure {
            reason: e.to_string(),
        }
    }
}

impl CritlineErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::NumericEvaluationFailure { .. } => error_code::NUMERIC_EVALUATION_FAILURE,
            Self::Cancelled => error_code::CANCELLED,
            Self::DeadlineExceeded { .. } => error_code::DEADLINE_EXCEEDED,
        }
    }
}
