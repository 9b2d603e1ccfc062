//! The optimize/satisfy stopping monitor.
//!
//! One optimized scorer, any number of constraints, and a single piece of
//! state: the last retained snapshot (the *baseline*). Each call to
//! [`OptimizeSatisfy::evaluate`] compares the current snapshot against that
//! baseline:
//!
//! - no baseline yet → retain the snapshot, continue;
//! - optimized score strictly below the baseline's, **and** the baseline met
//!   every constraint → stop, baseline stays frozen;
//! - otherwise → the current snapshot becomes the baseline, continue.
//!
//! Constraints are checked on the baseline, not on the current snapshot.
//! The comparison is one step back, never against the best value seen.
//!
//! "Stop" is advice to the caller. Calling again keeps comparing against the
//! frozen baseline until some call continues.

use tracing::{debug, info, trace};

use crate::error::MetricError;
use crate::scoring::{Constraint, Scorer};

/// Last retained snapshot, or none before the first evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Baseline<S> {
    Empty,
    Retained(S),
}

impl<S> Default for Baseline<S> {
    fn default() -> Self {
        Baseline::Empty
    }
}

impl<S> Baseline<S> {
    pub fn get(&self) -> Option<&S> {
        match self {
            Baseline::Empty => None,
            Baseline::Retained(s) => Some(s),
        }
    }

    pub fn is_retained(&self) -> bool {
        matches!(self, Baseline::Retained(_))
    }

    pub fn into_inner(self) -> Option<S> {
        match self {
            Baseline::Empty => None,
            Baseline::Retained(s) => Some(s),
        }
    }
}

/// Why an evaluation did or did not stop. Scores are the optimized metric
/// for the current snapshot and for the baseline it was compared with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    /// There was no baseline; the snapshot became the first one.
    Seeded,
    /// Optimized score held or improved.
    NoRegression { current: f64, baseline: f64 },
    /// Optimized score regressed, but the baseline missed a constraint.
    Unsatisfied { current: f64, baseline: f64 },
    /// Optimized score regressed and the baseline met every constraint.
    Stop { current: f64, baseline: f64 },
}

impl Verdict {
    #[inline]
    pub fn should_stop(&self) -> bool {
        matches!(self, Verdict::Stop { .. })
    }
}

#[derive(Debug)]
pub struct OptimizeSatisfy<S, E = MetricError> {
    optimize: Scorer<S, E>,
    constraints: Vec<Constraint<S, E>>,
    baseline: Baseline<S>,
}

impl<S, E> OptimizeSatisfy<S, E> {
    /// Monitor with no constraints: stops on the first regression.
    pub fn new(optimize: Scorer<S, E>) -> Self {
        Self { optimize, constraints: Vec::new(), baseline: Baseline::Empty }
    }

    pub fn with_constraints(
        optimize: Scorer<S, E>,
        satisfy: impl IntoIterator<Item = (Scorer<S, E>, f64)>,
    ) -> Self {
        let constraints = satisfy
            .into_iter()
            .map(|(scorer, threshold)| Constraint::new(scorer, threshold))
            .collect();
        Self { optimize, constraints, baseline: Baseline::Empty }
    }

    /// Add a constraint: `scorer(baseline) >= threshold` before stopping.
    #[must_use]
    pub fn satisfy(mut self, scorer: Scorer<S, E>, threshold: f64) -> Self {
        self.constraints.push(Constraint::new(scorer, threshold));
        self
    }

    /// Returns `Ok(true)` when the caller should stop iterating.
    ///
    /// Must be called once per iteration, in order. A scorer error is
    /// returned as-is and leaves the baseline untouched.
    pub fn evaluate(&mut self, snapshot: S) -> Result<bool, E> {
        self.assess(snapshot).map(|v| v.should_stop())
    }

    /// [`evaluate`](Self::evaluate), reporting why.
    pub fn assess(&mut self, snapshot: S) -> Result<Verdict, E> {
        let verdict = self.judge(&snapshot)?;
        match verdict {
            Verdict::Seeded => trace!("no baseline held, retaining first snapshot"),
            Verdict::Stop { current, baseline } => {
                info!(metric = self.optimize.label(), current, baseline, "stop condition met");
            }
            _ => {}
        }
        if !verdict.should_stop() {
            self.baseline = Baseline::Retained(snapshot);
        }
        Ok(verdict)
    }

    // Scores everything first; `assess` only writes state after this succeeds.
    fn judge(&self, current: &S) -> Result<Verdict, E> {
        let Some(baseline) = self.baseline.get() else {
            return Ok(Verdict::Seeded);
        };

        let cur = self.optimize.score(current)?;
        let base = self.optimize.score(baseline)?;
        let regressed = cur < base;
        debug!(
            metric = self.optimize.label(),
            current = cur,
            baseline = base,
            regressed,
            "compared optimized metric"
        );

        if !regressed {
            return Ok(Verdict::NoRegression { current: cur, baseline: base });
        }
        if self.baseline_satisfied(baseline)? {
            Ok(Verdict::Stop { current: cur, baseline: base })
        } else {
            Ok(Verdict::Unsatisfied { current: cur, baseline: base })
        }
    }

    fn baseline_satisfied(&self, baseline: &S) -> Result<bool, E> {
        for c in &self.constraints {
            if !c.is_met(baseline)? {
                debug!(metric = c.label(), threshold = c.threshold(), "baseline misses constraint");
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn baseline(&self) -> Option<&S> {
        self.baseline.get()
    }

    pub fn state(&self) -> &Baseline<S> {
        &self.baseline
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline.is_retained()
    }

    /// Forget the baseline; the next call seeds again.
    pub fn reset(&mut self) {
        self.baseline = Baseline::Empty;
    }

    pub fn into_baseline(self) -> Option<S> {
        self.baseline.into_inner()
    }

    pub fn optimize(&self) -> &Scorer<S, E> {
        &self.optimize
    }

    pub fn constraints(&self) -> &[Constraint<S, E>] {
        &self.constraints
    }
}
