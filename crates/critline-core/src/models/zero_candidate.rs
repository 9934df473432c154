use serde::{Deserialize, Serialize};

use crate::constants::CRITICAL_LINE_RE;

/// A detected near-zero location `(re, im)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZeroCandidate {
    pub re: f64,
    pub im: f64,
}

impl ZeroCandidate {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Candidate on the critical line at imaginary part `t`.
    pub const fn on_critical_line(t: f64) -> Self {
        Self::new(CRITICAL_LINE_RE, t)
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.re, self.im)
    }
}

impl From<(f64, f64)> for ZeroCandidate {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}
