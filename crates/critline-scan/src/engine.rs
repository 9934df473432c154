//! The zero scanner: parameter resolution, caching, and the scan pipeline.

use std::time::Instant;

use critline_core::config::CritlineConfig;
use critline_core::constants::{CRITICAL_LINE_RE, MAX_SAMPLE_COUNT};
use critline_core::errors::{ConfigError, ScanError};
use critline_core::models::{DetectionMode, ScanRequest, ScanResult};
use tracing::{debug, info, warn};

use crate::cache::{ScanCache, ScanKey};
use crate::control::ScanControl;
use crate::detect;
use crate::grid::sample_grid;
use crate::precision::WorkingPrecision;
use crate::zeta::LineEvaluator;

/// Fully resolved parameters of one scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParams {
    pub max_imaginary: f64,
    pub precision_digits: u32,
    pub sample_count: usize,
    pub threshold: f64,
    pub mode: DetectionMode,
    pub parallel: bool,
    pub refine_max_iterations: usize,
}

impl ScanParams {
    pub fn key(&self) -> ScanKey {
        ScanKey {
            max_imaginary: self.max_imaginary,
            precision_digits: self.precision_digits,
            sample_count: self.sample_count,
            threshold: self.threshold,
            mode: self.mode,
            refine_max_iterations: self.refine_max_iterations,
        }
    }
}

/// Scans the critical line for near-zeros of ζ.
///
/// Each scan builds its own [`WorkingPrecision`], so a scanner can be shared
/// across threads and used at different precisions concurrently.
pub struct ZeroScanner {
    config: CritlineConfig,
    cache: ScanCache,
}

impl ZeroScanner {
    /// Create a scanner from a configuration, validating it first.
    pub fn new(config: CritlineConfig) -> Result<Self, ConfigError> {
        CritlineConfig::validate(&config)?;
        let cache = ScanCache::from_config(&config.cache);
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &CritlineConfig {
        &self.config
    }

    pub fn cache(&self) -> &ScanCache {
        &self.cache
    }

    /// Scan `[0, max_imaginary]` at `precision_digits` with configured defaults.
    pub fn scan(&self, max_imaginary: f64, precision_digits: u32) -> Result<ScanResult, ScanError> {
        self.scan_request(&ScanRequest::new(max_imaginary, precision_digits))
    }

    pub fn scan_request(&self, request: &ScanRequest) -> Result<ScanResult, ScanError> {
        self.scan_with_control(request, &ScanControl::default())
    }

    /// Scan with cancellation and deadline control. A failed scan returns
    /// no partial result.
    pub fn scan_with_control(
        &self,
        request: &ScanRequest,
        control: &ScanControl,
    ) -> Result<ScanResult, ScanError> {
        let params = self.resolve(request)?;
        let key = params.key();

        if let Some(hit) = self.cache.get(&key) {
            debug!(
                max_imaginary = params.max_imaginary,
                digits = params.precision_digits,
                candidates = hit.len(),
                "scan cache hit"
            );
            return Ok(hit);
        }

        info!(
            max_imaginary = params.max_imaginary,
            digits = params.precision_digits,
            samples = params.sample_count,
            threshold = params.threshold,
            mode = %params.mode,
            "scan started"
        );
        let started = Instant::now();

        let result = Self::run(&params, control, started).inspect_err(|e| {
            if matches!(e, ScanError::Cancelled | ScanError::DeadlineExceeded { .. }) {
                warn!(error = %e, "scan stopped");
            }
        })?;

        info!(
            candidates = result.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scan finished"
        );
        self.cache.insert(&key, result.clone());
        Ok(result)
    }

    /// Merge request overrides with configuration and validate the result.
    pub fn resolve(&self, request: &ScanRequest) -> Result<ScanParams, ScanError> {
        let max = request.max_imaginary;
        let limit = self.config.domain.effective_max_imaginary_limit();
        if !max.is_finite() {
            return Err(ScanError::invalid("max_imaginary", "must be finite"));
        }
        if max <= 0.0 {
            return Err(ScanError::invalid(
                "max_imaginary",
                format!("must be positive, got {max}"),
            ));
        }
        if max > limit {
            return Err(ScanError::invalid(
                "max_imaginary",
                format!("{max} exceeds the configured limit {limit}"),
            ));
        }

        let digits = request.precision_digits;
        let precision = &self.config.precision;
        if !precision.contains(digits) {
            return Err(ScanError::invalid(
                "precision_digits",
                format!(
                    "{digits} is outside {}..={}",
                    precision.effective_min_digits(),
                    precision.effective_max_digits()
                ),
            ));
        }

        let scan = &self.config.scan;
        let sample_count = request
            .sample_count
            .unwrap_or_else(|| scan.effective_sample_count());
        if sample_count == 0 || sample_count > MAX_SAMPLE_COUNT {
            return Err(ScanError::invalid(
                "sample_count",
                format!("{sample_count} is outside 1..={MAX_SAMPLE_COUNT}"),
            ));
        }
        let threshold = request
            .threshold
            .unwrap_or_else(|| scan.effective_threshold());
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(ScanError::invalid(
                "threshold",
                format!("must be positive and finite, got {threshold}"),
            ));
        }

        Ok(ScanParams {
            max_imaginary: max,
            precision_digits: digits,
            sample_count,
            threshold,
            mode: request.mode.unwrap_or_else(|| scan.effective_mode()),
            parallel: scan.effective_parallel(),
            refine_max_iterations: scan.effective_refine_max_iterations(),
        })
    }

    fn run(
        params: &ScanParams,
        control: &ScanControl,
        started: Instant,
    ) -> Result<ScanResult, ScanError> {
        control.check(started)?;
        let wp = WorkingPrecision::from_digits(params.precision_digits)?;
        let evaluator = LineEvaluator::new(wp, CRITICAL_LINE_RE, params.max_imaginary)?;
        let grid = sample_grid(params.max_imaginary, params.sample_count);

        let magnitudes =
            detect::sample_magnitudes(&evaluator, &grid, params.parallel, control, started)?;

        let candidates = match params.mode {
            DetectionMode::Threshold => {
                detect::threshold_candidates(&grid, &magnitudes, params.threshold)
            }
            DetectionMode::Refined => detect::refined_candidates(
                &evaluator,
                &grid,
                &magnitudes,
                params.threshold,
                params.refine_max_iterations,
                control,
                started,
            )?,
        };

        Ok(ScanResult::new(candidates, grid.len()))
    }
}

impl Default for ZeroScanner {
    fn default() -> Self {
        let config = CritlineConfig::default();
        let cache = ScanCache::from_config(&config.cache);
        Self { config, cache }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults() {
        let scanner = ZeroScanner::default();
        let params = scanner.resolve(&ScanRequest::new(15.0, 15)).unwrap();
        assert_eq!(params.sample_count, 1000);
        assert_eq!(params.threshold, 1e-3);
        assert_eq!(params.mode, DetectionMode::Threshold);
        assert!(!params.parallel);
    }

    #[test]
    fn resolve_prefers_request_overrides() {
        let scanner = ZeroScanner::default();
        let request = ScanRequest::new(15.0, 15)
            .with_sample_count(10)
            .with_threshold(0.5)
            .with_mode(DetectionMode::Refined);
        let params = scanner.resolve(&request).unwrap();
        assert_eq!(params.sample_count, 10);
        assert_eq!(params.threshold, 0.5);
        assert_eq!(params.mode, DetectionMode::Refined);
    }

    #[test]
    fn resolve_rejects_bad_overrides() {
        let scanner = ZeroScanner::default();
        let zero_samples = ScanRequest::new(15.0, 15).with_sample_count(0);
        assert!(matches!(
            scanner.resolve(&zero_samples),
            Err(ScanError::InvalidParameter { .. })
        ));
        let bad_threshold = ScanRequest::new(15.0, 15).with_threshold(f64::NAN);
        assert!(matches!(
            scanner.resolve(&bad_threshold),
            Err(ScanError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = CritlineConfig::default();
        config.scan.sample_count = Some(0);
        assert!(ZeroScanner::new(config).is_err());
    }
}
