//! Stop signal for long-running scans.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::ScanError;

/// A stop request a scan polls at every sample and refinement step.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    fn cancel(&self);

    /// `Err(ScanError::Cancelled)` once a stop was requested.
    fn check_scan_boundary(&self) -> Result<(), ScanError> {
        if self.is_cancelled() {
            Err(ScanError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Shared stop flag handed from the caller to a running scan.
///
/// Clones observe the same flag, so a UI thread can keep one clone and
/// pass the other into `ScanControl`. A cancelled token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.stop.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_one_flag() {
        let token = CancellationToken::new();
        let handed_to_scan = token.clone();
        assert_eq!(handed_to_scan.check_scan_boundary(), Ok(()));
        token.cancel();
        assert!(handed_to_scan.is_cancelled());
        assert_eq!(
            handed_to_scan.check_scan_boundary(),
            Err(ScanError::Cancelled)
        );
    }

    #[test]
    fn cancel_is_sticky() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
