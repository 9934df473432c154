//! Sampling and detection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REFINE_MAX_ITERATIONS, DEFAULT_SAMPLE_COUNT, DEFAULT_THRESHOLD};
use crate::models::DetectionMode;

/// Configuration for sampling the critical line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Uniform samples over `[0, max_imaginary]`. Default: 1000.
    pub sample_count: Option<usize>,
    /// Magnitude cutoff for a near-zero. Default: 1e-3.
    pub threshold: Option<f64>,
    /// Detection mode. Default: threshold.
    pub mode: Option<DetectionMode>,
    /// Evaluate grid samples on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Golden-section iteration cap in refined mode. Default: 100.
    pub refine_max_iterations: Option<usize>,
}

impl ScanConfig {
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT)
    }

    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn effective_mode(&self) -> DetectionMode {
        self.mode.unwrap_or_default()
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    pub fn effective_refine_max_iterations(&self) -> usize {
        self.refine_max_iterations
            .unwrap_or(DEFAULT_REFINE_MAX_ITERATIONS)
    }
}
