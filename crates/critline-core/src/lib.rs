//! # critline-core
//!
//! Foundation crate for the critical-line zero scanner.
//! Defines the request/result models, errors, layered config, the
//! cancellation token, and tracing setup. The numeric engine in
//! `critline-scan` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::CritlineConfig;
pub use errors::{ConfigError, CritlineErrorCode, NumericError, ScanError};
pub use models::{DetectionMode, ScanRequest, ScanResult, ZeroCandidate};
pub use traits::{Cancellable, CancellationToken};
