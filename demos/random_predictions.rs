// demos/random_predictions.rs
// Run with:
//   RUST_LOG=optimize_satisfy=debug cargo run --example random_predictions
//
// A stand-in training loop: every step predicts 100 coin flips against a
// half-positive label set, scores precision/recall and asks the criterion
// whether to stop (optimize recall, keep precision >= 0.5).

use bevy_prng::WyRand;
use optimize_satisfy::{CriterionConfig, MetricSnapshot};
use rand_core::{RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

const MAX_ITER: usize = 9_999;
const SAMPLES: usize = 100;

fn unit(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

// Your training step.
fn train_step(rng: &mut WyRand) -> MetricSnapshot {
    let (mut tp, mut fp) = (0u32, 0u32);
    for i in 0..SAMPLES {
        let actual = i >= SAMPLES / 2;
        if unit(rng) < 0.5 {
            if actual { tp += 1 } else { fp += 1 }
        }
    }
    let predicted = tp + fp;
    let precision = if predicted == 0 { 0.0 } else { tp as f64 / predicted as f64 };
    let recall = tp as f64 / (SAMPLES / 2) as f64;
    MetricSnapshot::from([("precision", precision), ("recall", recall)])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(42u64);
    let mut rng = WyRand::from_seed(seed.to_le_bytes());

    let mut criterion =
        CriterionConfig::from_json(r#"{"optimize": "recall", "satisfy": {"precision": 0.5}}"#)?.build()?;

    for i in 0..MAX_ITER {
        let scores = train_step(&mut rng);
        println!("Step {}: {}", i + 1, serde_json::to_string(&scores)?);

        if criterion.evaluate(scores)? {
            println!("Stopping; kept baseline {:?}", criterion.baseline());
            break;
        }
    }
    Ok(())
}
