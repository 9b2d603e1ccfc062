//! Scoring functions: snapshot → score, higher is better.
//!
//! A [`Scorer`] is a labelled closure. The label only feeds log events; two
//! scorers with the same label are still distinct constraints.

use std::fmt;

use crate::error::MetricError;
use crate::snapshot::MetricSnapshot;

/// Boxed scoring closure. Must be deterministic and side-effect free.
pub type ScoreFn<S, E> = dyn Fn(&S) -> Result<f64, E> + Send + Sync;

pub struct Scorer<S, E> {
    label: String,
    f: Box<ScoreFn<S, E>>,
}

impl<S, E> Scorer<S, E> {
    pub fn new(
        label: impl Into<String>,
        f: impl Fn(&S) -> Result<f64, E> + Send + Sync + 'static,
    ) -> Self {
        Self { label: label.into(), f: Box::new(f) }
    }

    /// Wrap a closure that cannot fail.
    pub fn infallible(
        label: impl Into<String>,
        f: impl Fn(&S) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::new(label, move |s| Ok(f(s)))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn score(&self, snapshot: &S) -> Result<f64, E> {
        (self.f)(snapshot)
    }
}

impl Scorer<MetricSnapshot, MetricError> {
    /// Read the named metric; fails with [`MetricError::Missing`] if absent.
    pub fn metric(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = name.clone();
        Self::new(name, move |s: &MetricSnapshot| s.require(&key))
    }
}

impl<S, E> fmt::Debug for Scorer<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scorer").field("label", &self.label).finish_non_exhaustive()
    }
}

/// A scorer with the minimum score it must reach.
#[derive(Debug)]
pub struct Constraint<S, E> {
    scorer: Scorer<S, E>,
    threshold: f64,
}

impl<S, E> Constraint<S, E> {
    pub fn new(scorer: Scorer<S, E>, threshold: f64) -> Self {
        Self { scorer, threshold }
    }

    pub fn scorer(&self) -> &Scorer<S, E> {
        &self.scorer
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn label(&self) -> &str {
        self.scorer.label()
    }

    /// `score(snapshot) >= threshold`. A NaN score never meets it.
    pub fn is_met(&self, snapshot: &S) -> Result<bool, E> {
        let value = self.scorer.score(snapshot)?;
        Ok(value >= self.threshold)
    }
}
