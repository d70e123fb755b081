//! Attempt counters.
//!
//! An [`AttemptCounter`] tracks the current failure streak of a reconnect or
//! retry loop and asks its wrapped strategy how long to wait. What a success
//! does to the streak is a [`SuccessPolicy`]:
//!
//! - [`Reset`] clears it ([`ResettingAttemptCounter`])
//! - [`Decrement`] shortens it by one, floored at zero ([`DecrementingAttemptCounter`])
//! - [`NoSuccessPolicy`] leaves `success()` unimplemented
//!
//! # Examples
//!
//! ```rust
//! use reconnect_backoff::counter::AttemptCounter;
//! use reconnect_backoff::strategy::Linear;
//! use std::time::Duration;
//!
//! let mut counter = AttemptCounter::resetting(Linear::new(0.001, 0.0))
//!     .with_sleeper(|_: Duration| {});
//!
//! for connected in [false, false, true] {
//!     if connected {
//!         counter.success().unwrap();
//!     } else {
//!         counter.failed();
//!         counter.sleep().unwrap();
//!     }
//! }
//! assert_eq!(counter.attempts(), 0);
//! ```

mod attempt;
mod policy;

pub use attempt::{AttemptCounter, DecrementingAttemptCounter, ResettingAttemptCounter};
pub use policy::{Decrement, NoSuccessPolicy, Reset, SuccessPolicy};
