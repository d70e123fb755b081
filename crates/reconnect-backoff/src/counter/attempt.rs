//! Failure-streak tracking on top of a backoff strategy.

use super::policy::{Decrement, NoSuccessPolicy, Reset, SuccessPolicy};
use crate::error::Result;
use crate::sleep::{Sleeper, ThreadSleeper, sleep_async, to_duration};
use crate::strategy::Backoff;
use std::fmt;
use std::sync::Arc;

/// Pairs a backoff strategy with a count of consecutive failures.
///
/// The counter starts at zero attempts. [`failed`](Self::failed) adds one,
/// and [`success`](Self::success) applies the policy `P`. The delay is always
/// the wrapped strategy evaluated at the current attempt count.
///
/// # Type Parameters
/// - `B`: The wrapped [`Backoff`] strategy
/// - `P`: The [`SuccessPolicy`]; [`NoSuccessPolicy`] leaves `success()` unimplemented
///
/// # Examples
///
/// ```rust
/// use reconnect_backoff::counter::AttemptCounter;
/// use reconnect_backoff::strategy::Exponential;
///
/// let mut counter = AttemptCounter::decrementing(Exponential::new(2.0));
/// counter.failed();
/// counter.failed();
/// assert_eq!(counter.backoff().unwrap(), 4.0);
///
/// counter.success().unwrap();
/// assert_eq!(counter.attempts(), 1);
/// assert_eq!(counter.backoff().unwrap(), 2.0);
/// ```
pub struct AttemptCounter<B, P = NoSuccessPolicy> {
    strategy: B,
    policy: P,
    attempts: u32,
    sleeper: Arc<dyn Sleeper>,
}

/// A counter whose successes clear the failure streak.
pub type ResettingAttemptCounter<B> = AttemptCounter<B, Reset>;

/// A counter whose successes shorten the failure streak by one.
pub type DecrementingAttemptCounter<B> = AttemptCounter<B, Decrement>;

impl<B: Backoff> AttemptCounter<B> {
    /// Create a counter with no success policy.
    ///
    /// Calling [`success`](Self::success) on it is an error; pick
    /// [`resetting`](AttemptCounter::resetting) or
    /// [`decrementing`](AttemptCounter::decrementing) for real use.
    pub fn new(strategy: B) -> Self {
        Self::with_policy(strategy, NoSuccessPolicy)
    }
}

impl<B: Backoff> AttemptCounter<B, Reset> {
    /// Create a counter that resets to zero on success.
    pub fn resetting(strategy: B) -> Self {
        Self::with_policy(strategy, Reset)
    }
}

impl<B: Backoff> AttemptCounter<B, Decrement> {
    /// Create a counter that decrements by one on success.
    pub fn decrementing(strategy: B) -> Self {
        Self::with_policy(strategy, Decrement)
    }
}

impl<B: Backoff, P: SuccessPolicy> AttemptCounter<B, P> {
    /// Create a counter with an explicit success policy.
    pub fn with_policy(strategy: B, policy: P) -> Self {
        Self {
            strategy,
            policy,
            attempts: 0,
            sleeper: Arc::new(ThreadSleeper),
        }
    }

    /// Replace the sleep primitive used by [`sleep`](Self::sleep).
    pub fn with_sleeper<S: Sleeper + 'static>(mut self, sleeper: S) -> Self {
        self.sleeper = Arc::new(sleeper);
        self
    }

    /// Consecutive failures currently counted.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The wrapped strategy.
    pub fn strategy(&self) -> &B {
        &self.strategy
    }

    /// The delay, in seconds, for the current attempt count.
    pub fn backoff(&self) -> Result<f64> {
        self.strategy.backoff(self.attempts)
    }

    /// Block for [`backoff`](Self::backoff) seconds.
    pub fn sleep(&self) -> Result<()> {
        let duration = to_duration(self.backoff()?)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(attempts = self.attempts, ?duration, "backing off");
        self.sleeper.sleep(duration);
        Ok(())
    }

    /// Wait for [`backoff`](Self::backoff) seconds on the tokio timer.
    ///
    /// Dropping the future cancels the wait.
    pub async fn sleep_async(&self) -> Result<()> {
        let delay = self.backoff()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(attempts = self.attempts, delay, "backing off");
        sleep_async(delay).await
    }

    /// Record a failure.
    pub fn failed(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
        #[cfg(feature = "tracing")]
        tracing::debug!(attempts = self.attempts, "attempt failed");
    }

    /// Record a success, adjusting the count according to the policy.
    ///
    /// # Errors
    ///
    /// Returns [`BackoffError::NotImplemented`](crate::error::BackoffError::NotImplemented)
    /// when the policy does not define success. The count is left unchanged.
    pub fn success(&mut self) -> Result<()> {
        self.attempts = self.policy.on_success(self.attempts)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(attempts = self.attempts, "attempt succeeded");
        Ok(())
    }
}

impl<B: fmt::Debug, P: fmt::Debug> fmt::Debug for AttemptCounter<B, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptCounter")
            .field("strategy", &self.strategy)
            .field("policy", &self.policy)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}
