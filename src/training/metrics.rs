//! Binary classification metrics over thresholded continuous values.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Values strictly above `threshold` are the positive class.
///
/// Pairs are taken up to the shorter of the two slices. Any ratio with a zero
/// denominator is reported as `0.0`; an empty input yields all zeros.
pub fn evaluate(predictions: &[f64], actual: &[f64], threshold: f64) -> ClassificationMetrics {
    let (mut tp, mut tn, mut fp, mut fneg) = (0usize, 0usize, 0usize, 0usize);
    for (&p, &a) in predictions.iter().zip(actual) {
        match (p > threshold, a > threshold) {
            (true, true) => tp += 1,
            (false, false) => tn += 1,
            (true, false) => fp += 1,
            (false, true) => fneg += 1,
        }
    }

    let total = tp + tn + fp + fneg;
    let accuracy = ratio(tp + tn, total);
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fneg);
    let f1_score = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassificationMetrics {
        accuracy,
        precision,
        recall,
        f1_score,
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
