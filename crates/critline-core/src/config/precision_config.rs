//! Accepted working-precision range.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_PRECISION_DIGITS, DEFAULT_MIN_PRECISION_DIGITS};

/// Range of `precision_digits` a scan accepts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PrecisionConfig {
    /// Default: 5.
    pub min_digits: Option<u32>,
    /// Default: 50.
    pub max_digits: Option<u32>,
}

impl PrecisionConfig {
    pub fn effective_min_digits(&self) -> u32 {
        self.min_digits.unwrap_or(DEFAULT_MIN_PRECISION_DIGITS)
    }

    pub fn effective_max_digits(&self) -> u32 {
        self.max_digits.unwrap_or(DEFAULT_MAX_PRECISION_DIGITS)
    }

    pub fn contains(&self, digits: u32) -> bool {
        (self.effective_min_digits()..=self.effective_max_digits()).contains(&digits)
    }
}
