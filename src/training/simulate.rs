//! Jittered training results and best-model selection.
//!
//! Per algorithm, four draws in order: accuracy, precision, recall, time.
//!
//! - accuracy  = clamp(base + (U - 0.5) * 0.06, 0.70, 0.98)
//! - precision = max(0.65, accuracy + (U - 0.5) * 0.04)
//! - recall    = max(0.65, accuracy + (U - 0.5) * 0.04)
//! - f1        = harmonic mean of precision and recall
//! - time      = max(50, base_time + U * 200 - 100)
//!
//! Metrics are rounded to 4 decimals and time to whole milliseconds, after f1 is
//! computed from the unrounded precision/recall.

use serde::Serialize;
use tracing::debug;

use crate::data::RandomSource;
use crate::math::{round_half_up, round_to};
use crate::training::catalog::{ALGORITHMS, Algorithm};

const ACCURACY_SPREAD: f64 = 0.06;
const ACCURACY_MIN: f64 = 0.70;
const ACCURACY_MAX: f64 = 0.98;
const PR_SPREAD: f64 = 0.04;
const PR_MIN: f64 = 0.65;
const TIME_SPREAD_MS: f64 = 200.0;
const TIME_MIN_MS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResult {
    pub name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub train_time_ms: u64,
}

/// Output of a simulated training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRun {
    pub results: Vec<ModelResult>,
    /// Index into `results` of the most accurate model.
    pub best: usize,
}

impl TrainingRun {
    pub fn best_model(&self) -> &ModelResult {
        &self.results[self.best]
    }
}

/// Simulate the whole catalog.
pub fn simulate_training<R>(rng: &mut R) -> TrainingRun
where
    R: RandomSource + ?Sized,
{
    let results: Vec<ModelResult> = ALGORITHMS.iter().map(|algo| simulate_model(algo, &mut *rng)).collect();
    // Catalog is non-empty, so a best index always exists.
    let best = select_best(&results).unwrap_or(0);
    debug!(best = %results[best].name, "simulated training complete");
    TrainingRun { results, best }
}

pub fn simulate_model<R>(algo: &Algorithm, rng: &mut R) -> ModelResult
where
    R: RandomSource + ?Sized,
{
    let accuracy = (algo.base_accuracy + (rng.next_f64() - 0.5) * ACCURACY_SPREAD).clamp(ACCURACY_MIN, ACCURACY_MAX);
    let precision = (accuracy + (rng.next_f64() - 0.5) * PR_SPREAD).max(PR_MIN);
    let recall = (accuracy + (rng.next_f64() - 0.5) * PR_SPREAD).max(PR_MIN);
    let f1 = 2.0 * precision * recall / (precision + recall);
    let time_ms = (algo.base_train_ms + rng.next_f64() * TIME_SPREAD_MS - TIME_SPREAD_MS / 2.0).max(TIME_MIN_MS);

    ModelResult {
        name: algo.name.to_string(),
        accuracy: round_to(accuracy, 4),
        precision: round_to(precision, 4),
        recall: round_to(recall, 4),
        f1_score: round_to(f1, 4),
        train_time_ms: round_half_up(time_ms) as u64,
    }
}

/// Highest accuracy wins; the earliest entry wins ties.
pub fn select_best(results: &[ModelResult]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, r) in results.iter().enumerate() {
        match best {
            Some(b) if results[b].accuracy >= r.accuracy => {}
            _ => best = Some(idx),
        }
    }
    best
}
