//! Exponential backoff.

use super::backoff::Backoff;
use crate::error::Result;

/// Delay grows geometrically with the attempt number.
///
/// # Mathematical Formula
///
/// ```text
/// delay = factor * base ^ attempt + constant
/// ```
///
/// The exponent applies to `base` only. `factor` defaults to 1 and `constant`
/// to 0, so `Exponential::new(2.0)` yields 1, 2, 4, 8, ...
///
/// # Examples
///
/// ```rust
/// use reconnect_backoff::strategy::{Backoff, Exponential};
///
/// let exponential = Exponential::new(2.0);
/// assert_eq!(exponential.backoff(3).unwrap(), 8.0);
///
/// // 0.5 * 3^attempt + 1
/// let exponential = Exponential::builder()
///     .base(3.0)
///     .factor(0.5)
///     .constant(1.0)
///     .build();
/// assert_eq!(exponential.backoff(2).unwrap(), 5.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    base: f64,
    factor: f64,
    constant: f64,
}

impl Exponential {
    /// Create `base ^ attempt` with a factor of 1 and no constant.
    pub const fn new(base: f64) -> Self {
        Self {
            base,
            factor: 1.0,
            constant: 0.0,
        }
    }

    /// Create `factor * base ^ attempt` with no constant.
    pub const fn with_factor(base: f64, factor: f64) -> Self {
        Self {
            base,
            factor,
            constant: 0.0,
        }
    }

    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBuilder {
        ExponentialBuilder::default()
    }

    /// The growth base.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// The multiplier applied to `base ^ attempt`.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// The flat offset added to every delay.
    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl Backoff for Exponential {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        let exponent = attempt.min(i32::MAX as u32) as i32;
        Ok(self.factor * self.base.powi(exponent) + self.constant)
    }
}

/// Builder for [`Exponential`].
///
/// Defaults: `base = 2.0`, `factor = 1.0`, `constant = 0.0`.
#[derive(Debug, Default)]
pub struct ExponentialBuilder {
    base: Option<f64>,
    factor: Option<f64>,
    constant: Option<f64>,
}

impl ExponentialBuilder {
    /// Set the growth base.
    ///
    /// Default: 2.0
    pub fn base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }

    /// Set the multiplier applied to `base ^ attempt`.
    ///
    /// Default: 1.0
    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self
    }

    /// Set the flat offset added to every delay.
    ///
    /// Default: 0.0
    pub fn constant(mut self, constant: f64) -> Self {
        self.constant = Some(constant);
        self
    }

    /// Build the [`Exponential`], using defaults for any unset parameter.
    pub fn build(self) -> Exponential {
        Exponential {
            base: self.base.unwrap_or(2.0),
            factor: self.factor.unwrap_or(1.0),
            constant: self.constant.unwrap_or(0.0),
        }
    }
}
