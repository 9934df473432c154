//! Content-addressed scan result cache using moka.
//!
//! TinyLFU admission, bounded entry count, idle eviction. Keys are blake3
//! hashes of every parameter that affects a result.

use std::time::Duration;

use critline_core::config::CacheConfig;
use critline_core::constants::MAX_CACHE_TIME_TO_IDLE_SECS;
use critline_core::models::{DetectionMode, ScanResult};
use moka::sync::Cache;

/// Every input that determines a scan's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanKey {
    pub max_imaginary: f64,
    pub precision_digits: u32,
    pub sample_count: usize,
    pub threshold: f64,
    pub mode: DetectionMode,
    pub refine_max_iterations: usize,
}

impl ScanKey {
    /// blake3 hash of the canonical little-endian encoding.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.max_imaginary.to_bits().to_le_bytes());
        hasher.update(&self.precision_digits.to_le_bytes());
        hasher.update(&(self.sample_count as u64).to_le_bytes());
        hasher.update(&self.threshold.to_bits().to_le_bytes());
        hasher.update(self.mode.as_str().as_bytes());
        if self.mode == DetectionMode::Refined {
            hasher.update(&(self.refine_max_iterations as u64).to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// Bounded cache of successful scan results. Capacity 0 disables it.
pub struct ScanCache {
    cache: Option<Cache<String, ScanResult>>,
}

impl ScanCache {
    /// Idle times beyond ten years are clamped.
    pub fn new(capacity: u64, time_to_idle: Duration) -> Self {
        let time_to_idle = time_to_idle.min(Duration::from_secs(MAX_CACHE_TIME_TO_IDLE_SECS));
        let cache = (capacity > 0).then(|| {
            Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(time_to_idle)
                .build()
        });
        Self { cache }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.effective_capacity(),
            Duration::from_secs(config.effective_time_to_idle_secs()),
        )
    }

    pub fn disabled() -> Self {
        Self { cache: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn get(&self, key: &ScanKey) -> Option<ScanResult> {
        self.cache.as_ref()?.get(&key.content_hash())
    }

    pub fn insert(&self, key: &ScanKey, result: ScanResult) {
        if let Some(cache) = &self.cache {
            cache.insert(key.content_hash(), result);
        }
    }

    /// Approximate number of entries (moka counts lazily).
    pub fn len(&self) -> u64 {
        self.cache.as_ref().map_or(0, |c| c.entry_count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }
}
