//! Logging setup. The scan crates only emit `tracing` events; installing a
//! subscriber is left to the embedding application.

pub mod setup;

pub use setup::{init_tracing, log_filter, DEFAULT_LOG_FILTER, LOG_ENV_VAR};
