//! The sleep primitive that strategies and counters block on.
//!
//! Sleeping is an injected dependency rather than a hard-wired call to
//! [`std::thread::sleep`], so callers can substitute a recorder in tests or a
//! custom timer in production without touching process-wide state.
//!
//! Any `Fn(Duration) + Send + Sync` closure is a [`Sleeper`]:
//!
//! ```rust
//! use reconnect_backoff::sleep::Sleeper;
//! use std::sync::Mutex;
//! use std::time::Duration;
//!
//! let slept = Mutex::new(Vec::new());
//! let recorder = |d: Duration| slept.lock().unwrap().push(d);
//! recorder.sleep(Duration::from_millis(5));
//! assert_eq!(*slept.lock().unwrap(), vec![Duration::from_millis(5)]);
//! ```

use crate::error::{BackoffError, Result};
use std::time::Duration;

/// Blocks the calling thread for a given duration.
pub trait Sleeper: Send + Sync {
    /// Block for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Sleeps on the current thread with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<F> Sleeper for F
where
    F: Fn(Duration) + Send + Sync,
{
    fn sleep(&self, duration: Duration) {
        self(duration)
    }
}

/// Convert a delay in seconds into a [`Duration`].
///
/// Negative, NaN, and overflowing delays are rejected with
/// [`BackoffError::InvalidDelay`] rather than panicking.
pub fn to_duration(delay: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(delay).map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::warn!(delay, "backoff produced a delay that cannot be slept for");
        BackoffError::InvalidDelay(delay)
    })
}

/// Sleep for `delay` seconds on the tokio timer.
///
/// Cancellation is the caller's: dropping the future stops the wait.
pub async fn sleep_async(delay: f64) -> Result<()> {
    let duration = to_duration(delay)?;
    tokio::time::sleep(duration).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Instant;

    #[test]
    fn test_to_duration_fractional_seconds() {
        assert_eq!(to_duration(1.5).unwrap(), Duration::from_millis(1500));
        assert_eq!(to_duration(0.0).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_to_duration_rejects_negative() {
        assert_eq!(to_duration(-0.1), Err(BackoffError::InvalidDelay(-0.1)));
    }

    #[test]
    fn test_to_duration_rejects_non_finite() {
        assert!(matches!(
            to_duration(f64::NAN),
            Err(BackoffError::InvalidDelay(_))
        ));
        assert_eq!(
            to_duration(f64::INFINITY),
            Err(BackoffError::InvalidDelay(f64::INFINITY))
        );
    }

    #[test]
    fn test_closure_sleeper_records() {
        let slept = Mutex::new(Vec::new());
        let sleeper = |d: Duration| slept.lock().unwrap().push(d);

        sleeper.sleep(Duration::from_secs(3));
        sleeper.sleep(Duration::from_millis(7));

        assert_eq!(
            *slept.lock().unwrap(),
            vec![Duration::from_secs(3), Duration::from_millis(7)]
        );
    }

    #[test]
    fn test_thread_sleeper_blocks() {
        let start = Instant::now();
        ThreadSleeper.sleep(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_sleep_async_rejects_negative() {
        assert_eq!(sleep_async(-2.0).await, Err(BackoffError::InvalidDelay(-2.0)));
    }

    #[tokio::test]
    async fn test_sleep_async_waits() {
        let start = tokio::time::Instant::now();
        sleep_async(0.005).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
