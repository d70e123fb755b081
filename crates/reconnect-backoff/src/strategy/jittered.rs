//! Randomizing another strategy's delay.

use super::backoff::Backoff;
use crate::error::Result;

/// Spreads the wrapped strategy's delay by up to `±jitter` of its value.
///
/// Many clients reconnecting to the same server after an outage otherwise
/// retry in lockstep. The delay is `delay * (1 + jitter * u)` with `u` drawn
/// uniformly from `[-1, 1)`, so a jitter of 0.1 varies the delay by ±10%.
///
/// ```rust
/// use reconnect_backoff::strategy::{Backoff, Constant, Jittered};
///
/// let jittered = Jittered::new(Constant::new(10.0), 0.2);
/// let delay = jittered.backoff(0).unwrap();
/// assert!((8.0..=12.0).contains(&delay));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jittered<B> {
    inner: B,
    jitter: f64,
}

impl<B: Backoff> Jittered<B> {
    /// Wrap `inner` with a jitter fraction, clamped to `[0.0, 1.0]`.
    pub fn new(inner: B, jitter: f64) -> Self {
        Self {
            inner,
            jitter: jitter.clamp(0.0, 1.0),
        }
    }

    /// The jitter fraction in `[0.0, 1.0]`.
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// The wrapped strategy.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Backoff> Backoff for Jittered<B> {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        let delay = self.inner.backoff(attempt)?;
        if self.jitter > 0.0 {
            let jitter_amount = delay * self.jitter * (rand::random::<f64>() - 0.5) * 2.0;
            Ok(delay + jitter_amount)
        } else {
            Ok(delay)
        }
    }
}
