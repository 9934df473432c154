use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_IMAGINARY_LIMIT;

/// Bounds on the scanned segment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DomainConfig {
    /// Largest accepted `max_imaginary`. Default: 500.
    pub max_imaginary_limit: Option<f64>,
}

impl DomainConfig {
    pub fn effective_max_imaginary_limit(&self) -> f64 {
        self.max_imaginary_limit
            .unwrap_or(DEFAULT_MAX_IMAGINARY_LIMIT)
    }
}
