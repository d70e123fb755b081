//! Error types for backoff strategies and attempt counters.

/// Result type for backoff operations.
pub type Result<T> = std::result::Result<T, BackoffError>;

/// Errors produced while computing or sleeping for a backoff delay.
///
/// Computation itself never validates its inputs: a strategy with odd
/// parameters yields an odd delay. Errors only surface when an abstract
/// operation is reached, when a delay cannot become a [`std::time::Duration`],
/// or when declarative configuration is malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackoffError {
    /// An abstract operation was invoked on a type that does not provide it.
    ///
    /// This is a programming error at the call site: use a concrete strategy
    /// or success policy instead.
    #[error("{operation} is not implemented")]
    NotImplemented {
        /// The operation that was reached, e.g. `"Backoff::backoff"`.
        operation: &'static str,
    },

    /// A computed delay is negative, NaN, or too large to sleep for.
    #[error("invalid delay: {0}s cannot be slept for")]
    InvalidDelay(f64),

    /// Declarative configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BackoffError {
    /// Returns `true` if this error signals an abstract operation.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

impl From<serde_json::Error> for BackoffError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
