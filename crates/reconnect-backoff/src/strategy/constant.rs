//! Constant backoff.

use super::backoff::Backoff;
use crate::error::Result;

/// The same delay for every attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    delay: f64,
}

impl Constant {
    /// Create a strategy that always waits `delay` seconds.
    pub const fn new(delay: f64) -> Self {
        Self { delay }
    }

    /// The fixed delay in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }
}

impl Backoff for Constant {
    fn backoff(&self, _attempt: u32) -> Result<f64> {
        Ok(self.delay)
    }
}
