//! Name-keyed metric snapshots.
//!
//! One `MetricSnapshot` per iteration, e.g. `{"precision": 0.6, "recall": 0.7}`.
//! There is no in-place mutation: build it whole, hand it to the monitor.

use std::collections::BTreeMap;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::MetricError;

/// Immutable mapping from metric name to score.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(transparent))]
pub struct MetricSnapshot {
    values: BTreeMap<String, f64>,
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consuming builder: `MetricSnapshot::new().with("recall", 0.7)`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Like [`get`](Self::get), but a missing metric is an error.
    pub fn require(&self, name: &str) -> Result<f64, MetricError> {
        self.get(name).ok_or_else(|| MetricError::missing(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Metrics in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for MetricSnapshot {
    fn from(pairs: [(K, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
