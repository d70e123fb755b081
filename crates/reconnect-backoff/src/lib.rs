#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Backoff policies for reconnect and retry loops.
//!
//! This crate provides the pieces a long-lived client (for example a message
//! queue consumer) uses to pace its reconnect attempts:
//!
//! - **Backoff strategies** via the [`Backoff`](strategy::Backoff) trait
//!   - [`Linear`](strategy::Linear), [`Constant`](strategy::Constant) and
//!     [`Exponential`](strategy::Exponential) delay curves
//!   - [`Clamped`](strategy::Clamped) bounds and [`Jittered`](strategy::Jittered) randomization
//! - **Attempt counters** via [`AttemptCounter`](counter::AttemptCounter), which
//!   track the failure streak and reset or decay it on success
//! - **An injected sleep primitive** via [`Sleeper`](sleep::Sleeper)
//! - **Declarative configuration** via [`CounterConfig`](config::CounterConfig)
//!
//! Delays are plain seconds (`f64`). They only become a
//! [`Duration`](std::time::Duration) when it is time to sleep.
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use reconnect_backoff::prelude::*;
//!
//! let mut counter = AttemptCounter::resetting(Exponential::new(2.0));
//!
//! counter.failed();
//! counter.failed();
//! counter.failed();
//! assert_eq!(counter.backoff()?, 8.0);
//!
//! counter.success()?;
//! assert_eq!(counter.backoff()?, 1.0);
//! # Ok::<(), BackoffError>(())
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod sleep;
pub mod strategy;

mod property_tests;

/// Convenient re-exports of commonly used items.
///
/// Import everything needed for a reconnect loop with:
///
/// ```rust
/// use reconnect_backoff::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{BackoffConfig, CounterConfig, StrategyConfig, SuccessMode};
    pub use crate::counter::{
        AttemptCounter, Decrement, DecrementingAttemptCounter, NoSuccessPolicy, Reset,
        ResettingAttemptCounter, SuccessPolicy,
    };
    pub use crate::error::BackoffError;
    pub use crate::sleep::{Sleeper, ThreadSleeper};
    pub use crate::strategy::{Backoff, Clamped, Constant, Exponential, Jittered, Linear};
}
