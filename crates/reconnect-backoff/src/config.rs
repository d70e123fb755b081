//! Declarative strategy and counter configuration.
//!
//! Lets a host application keep its reconnect policy in its own config file
//! and build the matching strategy at startup. Any serde format works:
//!
//! ```rust
//! use reconnect_backoff::config::CounterConfig;
//!
//! let config = CounterConfig::from_json(r#"{
//!     "strategy": { "backoff": { "kind": "exponential", "base": 2.0 }, "max": 30.0 },
//!     "on_success": "decrement"
//! }"#).unwrap();
//!
//! let mut counter = config.build().unwrap();
//! for _ in 0..10 {
//!     counter.failed();
//! }
//! assert_eq!(counter.backoff().unwrap(), 30.0);
//! ```

use crate::counter::{AttemptCounter, Decrement, Reset, SuccessPolicy};
use crate::error::{BackoffError, Result};
use crate::strategy::{Backoff, Clamped, Constant, Exponential, Jittered, Linear};
use serde::{Deserialize, Serialize};

/// The base delay curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum BackoffConfig {
    /// See [`Constant`].
    Constant {
        /// Seconds to wait on every attempt.
        delay: f64,
    },
    /// See [`Linear`].
    Linear {
        /// Seconds added per attempt.
        slope: f64,
        /// Seconds at attempt zero.
        intercept: f64,
    },
    /// See [`Exponential`].
    Exponential {
        /// Growth base.
        base: f64,
        /// Multiplier applied to `base ^ attempt`.
        #[serde(default = "default_factor")]
        factor: f64,
        /// Flat offset added to every delay.
        #[serde(default)]
        constant: f64,
    },
}

fn default_factor() -> f64 {
    1.0
}

impl BackoffConfig {
    fn parameters(&self) -> Vec<f64> {
        match *self {
            Self::Constant { delay } => vec![delay],
            Self::Linear { slope, intercept } => vec![slope, intercept],
            Self::Exponential {
                base,
                factor,
                constant,
            } => vec![base, factor, constant],
        }
    }

    fn build(&self) -> Box<dyn Backoff> {
        match *self {
            Self::Constant { delay } => Box::new(Constant::new(delay)),
            Self::Linear { slope, intercept } => Box::new(Linear::new(slope, intercept)),
            Self::Exponential {
                base,
                factor,
                constant,
            } => Box::new(
                Exponential::builder()
                    .base(base)
                    .factor(factor)
                    .constant(constant)
                    .build(),
            ),
        }
    }
}

/// A base curve plus optional bounds and jitter.
///
/// Jitter is applied before the bounds, so `max` is a hard cap. Unknown keys
/// are rejected, so a misspelled bound fails to parse instead of vanishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    /// The base delay curve.
    pub backoff: BackoffConfig,
    /// Lower bound in seconds. Defaults to 0 when only `max` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound in seconds. Unbounded when only `min` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Jitter fraction in `[0.0, 1.0]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,
}

impl From<BackoffConfig> for StrategyConfig {
    fn from(backoff: BackoffConfig) -> Self {
        Self {
            backoff,
            min: None,
            max: None,
            jitter: None,
        }
    }
}

impl StrategyConfig {
    /// Parse and validate a JSON strategy description.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`BackoffError::InvalidConfig`] for non-finite parameters,
    /// jitter outside `[0.0, 1.0]`, or `min > max`.
    pub fn validate(&self) -> Result<()> {
        if self.backoff.parameters().iter().any(|p| !p.is_finite()) {
            return Err(BackoffError::InvalidConfig(format!(
                "non-finite parameter in {:?}",
                self.backoff
            )));
        }
        if let Some(jitter) = self.jitter {
            if !(0.0..=1.0).contains(&jitter) {
                return Err(BackoffError::InvalidConfig(format!(
                    "jitter must be within [0, 1], got {}",
                    jitter
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(BackoffError::InvalidConfig(format!(
                    "min ({}) exceeds max ({})",
                    min, max
                )));
            }
        }
        if self.min.is_some_and(f64::is_nan) || self.max.is_some_and(f64::is_nan) {
            return Err(BackoffError::InvalidConfig("bound is NaN".to_string()));
        }
        Ok(())
    }

    /// Validate and build the configured strategy.
    pub fn build(&self) -> Result<Box<dyn Backoff>> {
        self.validate()?;

        let mut strategy = self.backoff.build();
        if let Some(jitter) = self.jitter {
            strategy = Box::new(Jittered::new(strategy, jitter));
        }
        if self.min.is_some() || self.max.is_some() {
            strategy = Box::new(Clamped::new(
                strategy,
                self.min.unwrap_or(0.0),
                self.max.unwrap_or(f64::INFINITY),
            ));
        }
        Ok(strategy)
    }
}

/// What a success does to the failure streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessMode {
    /// See [`Reset`].
    #[default]
    Reset,
    /// See [`Decrement`].
    Decrement,
}

impl SuccessMode {
    fn build(self) -> Box<dyn SuccessPolicy> {
        match self {
            Self::Reset => Box::new(Reset),
            Self::Decrement => Box::new(Decrement),
        }
    }
}

/// A complete attempt counter description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterConfig {
    /// The wrapped strategy.
    pub strategy: StrategyConfig,
    /// The success policy. Defaults to [`SuccessMode::Reset`].
    #[serde(default)]
    pub on_success: SuccessMode,
}

impl CounterConfig {
    /// Parse and validate a JSON counter description.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.strategy.validate()?;
        Ok(config)
    }

    /// Validate and build a fresh counter with zero attempts.
    pub fn build(&self) -> Result<AttemptCounter<Box<dyn Backoff>, Box<dyn SuccessPolicy>>> {
        let strategy = self.strategy.build()?;
        Ok(AttemptCounter::with_policy(strategy, self.on_success.build()))
    }
}
