//! Bounding another strategy's delay.

use super::backoff::Backoff;
use crate::error::Result;

/// Clamps the wrapped strategy's delay into `[min, max]`.
///
/// Computed as `max(min(max, delay), min)`, so when `min > max` the minimum
/// wins instead of panicking.
///
/// ```rust
/// use reconnect_backoff::strategy::{Backoff, Clamped, Exponential};
///
/// let capped = Clamped::new(Exponential::new(2.0), 0.5, 30.0);
/// assert_eq!(capped.backoff(0).unwrap(), 1.0);
/// assert_eq!(capped.backoff(10).unwrap(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped<B> {
    inner: B,
    min: f64,
    max: f64,
}

impl<B: Backoff> Clamped<B> {
    /// Wrap `inner`, bounding its delay to `[min, max]`.
    pub fn new(inner: B, min: f64, max: f64) -> Self {
        Self { inner, min, max }
    }

    /// Wrap `inner` with only an upper bound.
    pub fn at_most(inner: B, max: f64) -> Self {
        Self::new(inner, 0.0, max)
    }

    /// The wrapped strategy.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Backoff> Backoff for Clamped<B> {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        let delay = self.inner.backoff(attempt)?;
        Ok(delay.min(self.max).max(self.min))
    }
}
