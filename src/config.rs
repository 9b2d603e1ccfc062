//! Criterion descriptions loaded from JSON.
//!
//! ```json
//! { "optimize": "recall", "satisfy": { "precision": 0.5 } }
//! ```
//!
//! Every name refers to a metric in a [`MetricSnapshot`]; `satisfy` may be
//! omitted. The built monitor checks constraints in metric-name order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MetricError};
use crate::monitor::OptimizeSatisfy;
use crate::scoring::Scorer;
use crate::snapshot::MetricSnapshot;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionConfig {
    /// Metric to optimize.
    pub optimize: String,
    /// Minimum thresholds, keyed by metric name.
    #[serde(default)]
    pub satisfy: BTreeMap<String, f64>,
}

impl CriterionConfig {
    pub fn new(optimize: impl Into<String>) -> Self {
        Self { optimize: optimize.into(), satisfy: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_threshold(mut self, metric: impl Into<String>, threshold: f64) -> Self {
        self.satisfy.insert(metric.into(), threshold);
        self
    }

    /// Parse and validate.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.optimize.trim().is_empty() {
            return Err(ConfigError::EmptyMetricName);
        }
        for (metric, &threshold) in &self.satisfy {
            if metric.trim().is_empty() {
                return Err(ConfigError::EmptyMetricName);
            }
            if !threshold.is_finite() {
                return Err(ConfigError::NonFiniteThreshold { metric: metric.clone(), threshold });
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<OptimizeSatisfy<MetricSnapshot, MetricError>, ConfigError> {
        self.validate()?;
        Ok(OptimizeSatisfy::with_constraints(
            Scorer::metric(self.optimize.as_str()),
            self.satisfy.iter().map(|(m, &t)| (Scorer::metric(m.as_str()), t)),
        ))
    }
}
