//! Constant-delay retry for stage executions.

use presenter_error::{PresenterError, PresenterResult};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::FixedInterval};
use tracing::warn;

/// How often, and how patiently, a failing stage is re-attempted.
///
/// Only errors reporting [`PresenterError::is_transient`] are retried.
/// Everything else fails on the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// Up to `max_attempts` total attempts, `delay` apart. Zero is treated as one.
    pub fn constant(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// A single attempt.
    pub fn none() -> Self {
        Self::constant(1, Duration::ZERO)
    }

    /// Total attempts including the first.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Pause between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `operation` until it succeeds, fails permanently, or attempts run out.
    pub async fn run<F, Fut, T>(&self, operation: F) -> PresenterResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = PresenterResult<T>>,
    {
        let strategy = FixedInterval::new(self.delay).take(self.max_attempts - 1);
        let attempt = AtomicUsize::new(0);
        let max_attempts = self.max_attempts;

        Retry::spawn(strategy, || async {
            let current = attempt.fetch_add(1, Ordering::Relaxed) + 1;

            match operation().await {
                Ok(value) => Ok(value),
                Err(e) => classify(e, current, max_attempts),
            }
        })
        .await
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

fn classify<T>(
    e: PresenterError,
    attempt: usize,
    max_attempts: usize,
) -> Result<T, RetryError<PresenterError>> {
    if e.is_transient() && attempt < max_attempts {
        warn!(attempt, max_attempts, error = %e, "Transient error, will retry");
        Err(RetryError::Transient {
            err: e,
            retry_after: None,
        })
    } else {
        warn!(attempt, error = %e, "Failing without retry");
        Err(RetryError::Permanent(e))
    }
}
