//! Stable error codes surfaced to consumers of the scanner.

pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const NUMERIC_EVALUATION_FAILURE: &str = "NUMERIC_EVALUATION_FAILURE";
pub const CANCELLED: &str = "CANCELLED";
pub const DEADLINE_EXCEEDED: &str = "DEADLINE_EXCEEDED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait CritlineErrorCode {
    fn error_code(&self) -> &'static str;
}
