//! Subscriber installation for applications embedding the scanner.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "CRITLINE_LOG";

/// Filter used when `CRITLINE_LOG` is unset or unparseable. Scan start and
/// finish events are `info`; evaluator sizing and cache hits are `debug`.
pub const DEFAULT_LOG_FILTER: &str = "critline=info";

/// Build the filter from `CRITLINE_LOG`, e.g. `critline_scan=debug`.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a compact fmt subscriber with [`log_filter`]. Runs once per
/// process; a subscriber installed by the host application wins.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().compact().with_target(true))
            .with(log_filter())
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!(target: "critline_core", "tracing initialized twice");
    }

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_LOG_FILTER.parse::<EnvFilter>().is_ok());
    }
}
