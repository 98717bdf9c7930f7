use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Exponential backoff for startup connection attempts.
///
/// `max_retries` counts the attempts after the first one, so an operation
/// runs at most `max_retries + 1` times.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Scale each delay into the 50%..100% range
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 200,
            max_delay_ms: 5_000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(self, max_retries: u32) -> Self {
        Self { max_retries, ..self }
    }

    pub fn with_initial_delay(self, initial_delay_ms: u64) -> Self {
        Self {
            initial_delay_ms,
            ..self
        }
    }

    pub fn with_max_delay(self, max_delay_ms: u64) -> Self {
        Self {
            max_delay_ms,
            ..self
        }
    }

    pub fn without_jitter(self) -> Self {
        Self {
            use_jitter: false,
            ..self
        }
    }

    /// Delays to sleep between attempts, one per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..=self.max_retries).map(|retry| {
            let base = self.base_delay_ms(retry);
            Duration::from_millis(if self.use_jitter { apply_jitter(base) } else { base })
        })
    }

    /// Un-jittered delay before retry number `retry` (1-based), capped at `max_delay_ms`.
    pub fn base_delay_ms(&self, retry: u32) -> u64 {
        let steps = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let grown = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(steps);
        if grown >= self.max_delay_ms as f64 {
            self.max_delay_ms
        } else {
            grown as u64
        }
    }
}

/// Runs `operation` until it succeeds or every delay in `config` is used up.
///
/// The last error is returned unchanged.
///
/// ```ignore
/// let db = retry_with_backoff(|| sql::connect(&url), RetryConfig::new().with_max_retries(5)).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delays = config.delays();
    let mut attempt = 1u32;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "Succeeded after retrying");
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        let Some(delay) = delays.next() else {
            warn!(attempt, error = %error, "Retries exhausted");
            return Err(error);
        };

        debug!(
            attempt,
            max_retries = config.max_retries,
            delay_ms = delay.as_millis() as u64,
            error = %error,
            "Attempt failed, backing off"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

/// [`retry_with_backoff`] with [`RetryConfig::default`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

fn apply_jitter(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    // RandomState is seeded per instance, which is enough spread for backoff.
    let percent = 50 + RandomState::new().hash_one(delay_ms) % 51;
    delay_ms * percent / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn instant() -> RetryConfig {
        RetryConfig::new().with_initial_delay(1).without_jitter()
    }

    fn failing_until(calls: Arc<AtomicU32>, successes_after: u32) -> impl FnMut() -> std::future::Ready<Result<u32, String>> {
        move || {
            let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(if call > successes_after {
                Ok(call)
            } else {
                Err(format!("refused on call {call}"))
            })
        }
    }

    #[tokio::test]
    async fn test_first_success_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(failing_until(calls.clone(), 0), instant()).await;

        assert_eq!(result, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(failing_until(calls.clone(), 2), instant()).await;

        assert_eq!(result, Ok(3));
    }

    #[tokio::test]
    async fn test_last_error_is_returned_when_budget_runs_out() {
        let calls = Arc::new(AtomicU32::new(0));
        let result =
            retry_with_backoff(failing_until(calls.clone(), 10), instant().with_max_retries(2)).await;

        assert_eq!(result, Err("refused on call 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_delays_double_until_capped() {
        let config = RetryConfig::new()
            .with_initial_delay(100)
            .with_max_delay(350)
            .with_max_retries(4)
            .without_jitter();

        let delays: Vec<u64> = config.delays().map(|d| d.as_millis() as u64).collect();
        assert_eq!(delays, vec![100, 200, 350, 350]);
    }

    #[test]
    fn test_zero_retries_has_no_delays() {
        assert_eq!(RetryConfig::new().with_max_retries(0).delays().count(), 0);
    }

    #[test]
    fn test_jitter_stays_within_half_to_full() {
        for _ in 0..20 {
            let jittered = apply_jitter(1000);
            assert!((500..=1000).contains(&jittered), "{jittered}");
        }
    }
}
