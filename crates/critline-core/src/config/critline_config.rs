//! Top-level critline configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CacheConfig, DomainConfig, PrecisionConfig, ScanConfig};
use crate::constants::{
    MAX_CACHE_TIME_TO_IDLE_SECS, MAX_SAMPLE_COUNT, MAX_SUPPORTED_DIGITS, MIN_SUPPORTED_DIGITS,
};
use crate::errors::ConfigError;
use crate::models::DetectionMode;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "critline.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CRITLINE_*`)
/// 3. Project config (`critline.toml` in the project root)
/// 4. User config (`~/.critline/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CritlineConfig {
    pub scan: ScanConfig,
    pub precision: PrecisionConfig,
    pub domain: DomainConfig,
    pub cache: CacheConfig,
}

/// Overrides supplied by the embedding application (e.g. slider values).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sample_count: Option<usize>,
    pub threshold: Option<f64>,
    pub mode: Option<DetectionMode>,
    pub parallel: Option<bool>,
    pub cache_capacity: Option<u64>,
}

impl CritlineConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): programmatic overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CritlineConfig) -> Result<(), ConfigError> {
        if let Some(count) = config.scan.sample_count {
            if count == 0 || count > MAX_SAMPLE_COUNT {
                return Err(invalid(
                    "scan.sample_count",
                    &format!("must lie within 1..={MAX_SAMPLE_COUNT}"),
                ));
            }
        }
        if let Some(threshold) = config.scan.threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(invalid("scan.threshold", "must be a positive finite number"));
            }
        }
        if let Some(iters) = config.scan.refine_max_iterations {
            if iters == 0 {
                return Err(invalid("scan.refine_max_iterations", "must be at least 1"));
            }
        }

        let min = config.precision.effective_min_digits();
        let max = config.precision.effective_max_digits();
        if min < MIN_SUPPORTED_DIGITS || max > MAX_SUPPORTED_DIGITS {
            return Err(invalid(
                "precision",
                &format!("digits must lie within {MIN_SUPPORTED_DIGITS}..={MAX_SUPPORTED_DIGITS}"),
            ));
        }
        if min > max {
            return Err(invalid("precision.min_digits", "must not exceed precision.max_digits"));
        }

        let limit = config.domain.effective_max_imaginary_limit();
        if !limit.is_finite() || limit <= 0.0 {
            return Err(invalid(
                "domain.max_imaginary_limit",
                "must be a positive finite number",
            ));
        }

        if let Some(secs) = config.cache.time_to_idle_secs {
            if secs == 0 || secs > MAX_CACHE_TIME_TO_IDLE_SECS {
                return Err(invalid(
                    "cache.time_to_idle_secs",
                    &format!("must lie within 1..={MAX_CACHE_TIME_TO_IDLE_SECS}"),
                ));
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.critline/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".critline").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut CritlineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CritlineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut CritlineConfig, other: &CritlineConfig) {
        // Scan
        if other.scan.sample_count.is_some() {
            base.scan.sample_count = other.scan.sample_count;
        }
        if other.scan.threshold.is_some() {
            base.scan.threshold = other.scan.threshold;
        }
        if other.scan.mode.is_some() {
            base.scan.mode = other.scan.mode;
        }
        if other.scan.parallel.is_some() {
            base.scan.parallel = other.scan.parallel;
        }
        if other.scan.refine_max_iterations.is_some() {
            base.scan.refine_max_iterations = other.scan.refine_max_iterations;
        }

        // Precision
        if other.precision.min_digits.is_some() {
            base.precision.min_digits = other.precision.min_digits;
        }
        if other.precision.max_digits.is_some() {
            base.precision.max_digits = other.precision.max_digits;
        }

        // Domain
        if other.domain.max_imaginary_limit.is_some() {
            base.domain.max_imaginary_limit = other.domain.max_imaginary_limit;
        }

        // Cache
        if other.cache.capacity.is_some() {
            base.cache.capacity = other.cache.capacity;
        }
        if other.cache.time_to_idle_secs.is_some() {
            base.cache.time_to_idle_secs = other.cache.time_to_idle_secs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CRITLINE_SAMPLE_COUNT`, `CRITLINE_THRESHOLD`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CritlineConfig) {
        if let Some(v) = env_parse::<usize>("CRITLINE_SAMPLE_COUNT") {
            config.scan.sample_count = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CRITLINE_THRESHOLD") {
            config.scan.threshold = Some(v);
        }
        if let Some(v) = env_parse::<DetectionMode>("CRITLINE_MODE") {
            config.scan.mode = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CRITLINE_PARALLEL") {
            config.scan.parallel = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CRITLINE_PRECISION_MIN") {
            config.precision.min_digits = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CRITLINE_PRECISION_MAX") {
            config.precision.max_digits = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CRITLINE_MAX_IMAGINARY_LIMIT") {
            config.domain.max_imaginary_limit = Some(v);
        }
        if let Some(v) = env_parse::<u64>("CRITLINE_CACHE_CAPACITY") {
            config.cache.capacity = Some(v);
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut CritlineConfig, o: &ConfigOverrides) {
        if let Some(v) = o.sample_count {
            config.scan.sample_count = Some(v);
        }
        if let Some(v) = o.threshold {
            config.scan.threshold = Some(v);
        }
        if let Some(v) = o.mode {
            config.scan.mode = Some(v);
        }
        if let Some(v) = o.parallel {
            config.scan.parallel = Some(v);
        }
        if let Some(v) = o.cache_capacity {
            config.cache.capacity = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
