//! Error types for snapshot lookup and criterion configuration.
//!
//! The monitor itself defines no errors: whatever a scorer returns is handed
//! back to the caller of `evaluate` unchanged.

use thiserror::Error;

/// Failure reading a metric out of a [`MetricSnapshot`](crate::MetricSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// The snapshot has no value under this name.
    #[error("metric `{name}` is missing from snapshot")]
    Missing {
        /// Name that was looked up.
        name: String,
    },
}

impl MetricError {
    #[inline]
    pub fn missing(name: impl Into<String>) -> Self {
        MetricError::Missing { name: name.into() }
    }
}

/// Errors building a criterion from a configuration description.
#[cfg(feature = "config")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text did not describe a criterion.
    #[error("invalid criterion description: {0}")]
    Parse(#[from] serde_json::Error),

    /// An optimize or satisfy entry named no metric.
    #[error("metric name must not be empty")]
    EmptyMetricName,

    /// A satisfy threshold was NaN or infinite.
    #[error("threshold for `{metric}` must be finite, got {threshold}")]
    NonFiniteThreshold { metric: String, threshold: f64 },
}
