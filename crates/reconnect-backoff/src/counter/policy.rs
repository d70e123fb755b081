//! What a success does to the failure streak.

use crate::error::{BackoffError, Result};

/// Decides the attempt count after a successful operation.
///
/// The provided [`on_success`](SuccessPolicy::on_success) returns
/// [`BackoffError::NotImplemented`], which is what [`NoSuccessPolicy`] relies on.
pub trait SuccessPolicy: Send + Sync {
    /// Return the new attempt count given the current one.
    fn on_success(&self, attempts: u32) -> Result<u32> {
        let _ = attempts;
        Err(BackoffError::NotImplemented {
            operation: "AttemptCounter::success",
        })
    }
}

/// No success policy: `success()` fails with [`BackoffError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSuccessPolicy;

impl SuccessPolicy for NoSuccessPolicy {}

/// Any success clears the failure streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reset;

impl SuccessPolicy for Reset {
    fn on_success(&self, _attempts: u32) -> Result<u32> {
        Ok(0)
    }
}

/// Each success removes one failure from the streak, never going below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decrement;

impl SuccessPolicy for Decrement {
    fn on_success(&self, attempts: u32) -> Result<u32> {
        Ok(attempts.saturating_sub(1))
    }
}

impl<P: SuccessPolicy + ?Sized> SuccessPolicy for Box<P> {
    fn on_success(&self, attempts: u32) -> Result<u32> {
        (**self).on_success(attempts)
    }
}
