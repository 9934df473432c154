//! Configuration system for critline.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod cache_config;
pub mod critline_config;
pub mod domain_config;
pub mod precision_config;
pub mod scan_config;

pub use cache_config::CacheConfig;
pub use critline_config::{ConfigOverrides, CritlineConfig};
pub use domain_config::DomainConfig;
pub use precision_config::PrecisionConfig;
pub use scan_config::ScanConfig;
