/*!
`optimize_satisfy`: an optimize/satisfy early-stopping criterion.

What it does
- Tells an iterative process (a training loop, a search, …) when to stop.
- One scorer is *optimized*: iteration continues while it does not regress.
- Any number of scorers are *satisfied*: stopping is only allowed once the
  previous snapshot met every threshold (`score >= threshold`).
- Stop iff `optimize(current) < optimize(baseline)` and every constraint
  holds on `baseline`, where `baseline` is the last snapshot that did not
  trigger a stop.

How to use (call surface only)
- Build an [`OptimizeSatisfy`] from an optimize [`Scorer`] and zero or more
  `(Scorer, threshold)` constraints, or from a [`CriterionConfig`].
- Once per iteration, compute a snapshot and call
  `evaluate(snapshot) -> Result<bool, E>`; stop when it returns `Ok(true)`.
- `assess` returns a [`Verdict`] explaining the decision.

What it does NOT do
- No metric computation, no training loop, no label encoding or calibration.
  Scores are whatever your closures return; higher is always better.
*/

pub mod error;
pub mod monitor;
pub mod scoring;
pub mod snapshot;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "config")]
pub use config::CriterionConfig;
#[cfg(feature = "config")]
pub use error::ConfigError;
pub use error::MetricError;
pub use monitor::{Baseline, OptimizeSatisfy, Verdict};
pub use scoring::{Constraint, ScoreFn, Scorer};
pub use snapshot::MetricSnapshot;
