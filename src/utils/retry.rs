//! Bounded exponential backoff for network operations.

use std::future::Future;
use std::time::Duration;

use log::warn;

use crate::error::FetchError;

/// Retry schedule for fallible network operations.
///
/// Only failures reported transient by [`FetchError::is_transient`] are
/// retried; everything else, including application-level outcomes such as
/// a rejected login, passes through on the first attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Backoff before the second attempt.
    pub min_wait: Duration,
    /// Upper bound on any single backoff.
    pub max_wait: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, min_wait: Duration, max_wait: Duration) -> Self {
        Self {
            max_attempts,
            min_wait,
            max_wait,
        }
    }

    /// Backoff after attempt `attempt`: starts at `min_wait`, doubles per
    /// attempt, capped at `max_wait`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self
            .min_wait
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)));
        delay.min(self.max_wait)
    }

    /// Runs `op` until it succeeds, fails permanently, or attempts run out.
    /// Exhausting attempts returns the final error unchanged.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        "Attempt {} of {} failed ({}), retrying in {:?}",
                        attempt, self.max_attempts, err, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(5), Duration::from_secs(30))
    }
}
