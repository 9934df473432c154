use serde::{Deserialize, Serialize};

use super::DetectionMode;

/// Input of a scan: the segment `[0, max_imaginary]` of the critical line
/// and the working precision in decimal digits.
///
/// Sample count, threshold, and detection mode fall back to the scanner's
/// configuration unless overridden here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub max_imaginary: f64,
    pub precision_digits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DetectionMode>,
}

impl ScanRequest {
    pub fn new(max_imaginary: f64, precision_digits: u32) -> Self {
        Self {
            max_imaginary,
            precision_digits,
            sample_count: None,
            threshold: None,
            mode: None,
        }
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_mode(mut self, mode: DetectionMode) -> Self {
        self.mode = Some(mode);
        self
    }
}
