//! The core backoff strategy trait.

use crate::error::{BackoffError, Result};
use crate::sleep::{Sleeper, ThreadSleeper, to_duration};
use std::sync::Arc;

/// A strategy mapping a retry attempt number to a delay in seconds.
///
/// Implementations are pure: the same attempt always yields the same delay
/// (modulo deliberate randomness such as [`Jittered`](super::Jittered)).
///
/// The provided [`backoff`](Backoff::backoff) returns
/// [`BackoffError::NotImplemented`]; it stands in for an abstract base and
/// every concrete strategy overrides it. The sleep helpers are built on top of
/// it and rarely need overriding.
///
/// # Examples
///
/// ```rust
/// use reconnect_backoff::strategy::{Backoff, Linear};
///
/// let linear = Linear::new(1.0, 2.0);
/// assert_eq!(linear.backoff(0).unwrap(), 2.0);
/// assert_eq!(linear.backoff(3).unwrap(), 5.0);
/// ```
///
/// A custom strategy only needs `backoff`:
///
/// ```rust
/// use reconnect_backoff::error::Result;
/// use reconnect_backoff::strategy::Backoff;
///
/// struct Fibonacci;
///
/// impl Backoff for Fibonacci {
///     fn backoff(&self, attempt: u32) -> Result<f64> {
///         let (mut a, mut b) = (0.0, 1.0);
///         for _ in 0..attempt {
///             (a, b) = (b, a + b);
///         }
///         Ok(a)
///     }
/// }
///
/// assert_eq!(Fibonacci.backoff(6).unwrap(), 8.0);
/// ```
pub trait Backoff: Send + Sync {
    /// Compute the delay, in seconds, for `attempt`.
    ///
    /// # Errors
    ///
    /// The provided implementation always fails with
    /// [`BackoffError::NotImplemented`].
    fn backoff(&self, attempt: u32) -> Result<f64> {
        let _ = attempt;
        Err(BackoffError::NotImplemented {
            operation: "Backoff::backoff",
        })
    }

    /// Block the current thread for `backoff(attempt)` seconds.
    fn sleep(&self, attempt: u32) -> Result<()> {
        self.sleep_with(attempt, &ThreadSleeper)
    }

    /// Block for `backoff(attempt)` seconds using an injected sleeper.
    ///
    /// The sleeper is not called if the delay cannot be computed or is not a
    /// valid duration.
    fn sleep_with(&self, attempt: u32, sleeper: &dyn Sleeper) -> Result<()> {
        let delay = self.backoff(attempt)?;
        sleeper.sleep(to_duration(delay)?);
        Ok(())
    }
}

impl<B: Backoff + ?Sized> Backoff for &B {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        (**self).backoff(attempt)
    }
}

impl<B: Backoff + ?Sized> Backoff for Box<B> {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        (**self).backoff(attempt)
    }
}

impl<B: Backoff + ?Sized> Backoff for Arc<B> {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        (**self).backoff(attempt)
    }
}
