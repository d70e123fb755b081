//! Backoff strategies.
//!
//! A strategy maps a retry attempt number to a delay in seconds. Strategies
//! hold only their parameters and never change after construction.
//!
//! # Key Types
//!
//! - [`Backoff`] - Core trait for backoff strategies
//! - [`Linear`] - `slope * attempt + intercept`
//! - [`Constant`] - the same delay every time
//! - [`Exponential`] - `factor * base ^ attempt + constant`
//! - [`Clamped`] - bounds another strategy's delay
//! - [`Jittered`] - randomizes another strategy's delay
//!
//! # Examples
//!
//! ```rust
//! use reconnect_backoff::strategy::{Backoff, Clamped, Exponential, Jittered};
//!
//! // 1s, 2s, 4s, ... capped at 60s, ±10%
//! let strategy = Jittered::new(Clamped::at_most(Exponential::new(2.0), 60.0), 0.1);
//! let delay = strategy.backoff(3).unwrap();
//! assert!((7.2..=8.8).contains(&delay));
//! ```

mod backoff;
mod clamped;
mod constant;
mod exponential;
mod jittered;
mod linear;

pub use backoff::Backoff;
pub use clamped::Clamped;
pub use constant::Constant;
pub use exponential::{Exponential, ExponentialBuilder};
pub use jittered::Jittered;
pub use linear::Linear;
