//! Linear backoff.

use super::backoff::Backoff;
use crate::error::Result;

/// Delay grows by a fixed step per attempt: `slope * attempt + intercept`.
///
/// No sign constraints are placed on either parameter; keeping the result
/// non-negative is the caller's responsibility.
///
/// ```rust
/// use reconnect_backoff::strategy::{Backoff, Linear};
///
/// let linear = Linear::new(0.5, 1.0);
/// assert_eq!(linear.backoff(4).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    slope: f64,
    intercept: f64,
}

impl Linear {
    /// Create a linear strategy `slope * attempt + intercept`.
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Seconds added per attempt.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Delay at attempt zero.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Backoff for Linear {
    fn backoff(&self, attempt: u32) -> Result<f64> {
        Ok(self.slope * f64::from(attempt) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_intercept_at_zero() {
        assert_eq!(Linear::new(1.0, 2.0).backoff(0).unwrap(), 2.0);
    }

    #[test]
    fn test_slope_between_attempts() {
        let linear = Linear::new(1.0, 2.0);
        assert_eq!(
            linear.backoff(0).unwrap() + 1.0,
            linear.backoff(1).unwrap()
        );
    }

    #[rstest]
    #[case(0, 2.0)]
    #[case(1, 5.0)]
    #[case(10, 32.0)]
    fn test_linear_values(#[case] attempt: u32, #[case] expected: f64) {
        assert_eq!(Linear::new(3.0, 2.0).backoff(attempt).unwrap(), expected);
    }

    #[test]
    fn test_negative_parameters_are_not_validated() {
        let linear = Linear::new(-1.0, 0.0);
        assert_eq!(linear.backoff(3).unwrap(), -3.0);
    }
}
