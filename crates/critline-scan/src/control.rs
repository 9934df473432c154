//! Cancellation and deadline control for a running scan.

use std::time::{Duration, Instant};

use critline_core::errors::ScanError;
use critline_core::traits::{Cancellable, CancellationToken};

/// Caller-side control over a scan. Checked before every evaluation.
#[derive(Debug, Clone, Default)]
pub struct ScanControl {
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl ScanControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Fails if cancellation was requested or the deadline has passed.
    pub fn check(&self, started: Instant) -> Result<(), ScanError> {
        if let Some(token) = &self.cancel {
            token.check_scan_boundary()?;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(ScanError::DeadlineExceeded {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_control_passes() {
        assert!(ScanControl::new().check(Instant::now()).is_ok());
    }

    #[test]
    fn cancelled_token_fails() {
        let token = CancellationToken::new();
        let control = ScanControl::new().with_cancellation(token.clone());
        token.cancel();
        assert_eq!(control.check(Instant::now()), Err(ScanError::Cancelled));
    }

    #[test]
    fn past_deadline_fails() {
        let started = Instant::now();
        let control = ScanControl::new().with_deadline(started);
        assert!(matches!(
            control.check(started),
            Err(ScanError::DeadlineExceeded { .. })
        ));
    }
}
