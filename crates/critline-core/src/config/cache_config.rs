//! Scan result cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TIME_TO_IDLE_SECS};

/// Configuration for the in-memory scan result cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached results; 0 disables caching. Default: 256.
    pub capacity: Option<u64>,
    /// Idle seconds before eviction. Default: 3600.
    pub time_to_idle_secs: Option<u64>,
}

impl CacheConfig {
    pub fn effective_capacity(&self) -> u64 {
        self.capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    pub fn effective_time_to_idle_secs(&self) -> u64 {
        self.time_to_idle_secs
            .unwrap_or(DEFAULT_CACHE_TIME_TO_IDLE_SECS)
    }
}
