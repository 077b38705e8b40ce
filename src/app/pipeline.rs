//! Shared command workflows.
//!
//! Each function takes its randomness explicitly and returns plain data, so
//! the CLI handlers only decide how to present the result.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::advice::{FactorInsight, ImprovementPotential, factor_insights, improvement_potential, recommend_messages};
use crate::data::{RandomSource, generate};
use crate::domain::{FeatureRecord, Prediction, ScoredRecord};
use crate::error::AppError;
use crate::math::round_to;
use crate::report::{DatasetStats, compute_stats};
use crate::scoring::{ScoringProfile, finalize_score, score_batch, score_breakdown, score_to_level, validate_features};
use crate::training::{TrainingRun, simulate_training};

/// Lower bound of the cosmetic confidence percentage.
pub const CONFIDENCE_MIN: f64 = 85.0;
pub const CONFIDENCE_SPAN: f64 = 15.0;

/// Everything shown on the prediction result page.
#[derive(Debug, Clone)]
pub struct PredictionReport {
    pub prediction: Prediction,
    pub insights: Vec<FactorInsight>,
    pub potential: ImprovementPotential,
}

/// Score a form submission under the interactive profile.
///
/// Draw order: score jitter, then confidence.
pub fn run_prediction<R>(features: FeatureRecord, validate: bool, rng: &mut R) -> Result<PredictionReport, AppError>
where
    R: RandomSource + ?Sized,
{
    if validate {
        validate_features(&features)?;
    }

    let breakdown = score_breakdown(&features, ScoringProfile::Interactive, rng);
    let credit_score = finalize_score(breakdown.raw_total());
    let credit_level = score_to_level(credit_score);
    let confidence = round_to(rng.next_f64() * CONFIDENCE_SPAN + CONFIDENCE_MIN, 2);

    let prediction = Prediction {
        input: features,
        credit_score,
        credit_level,
        confidence,
        recommendations: recommend_messages(&features, credit_score),
        breakdown,
        generated_at: Utc::now(),
    };
    info!(credit_score, level = %credit_level, "prediction complete");

    Ok(PredictionReport {
        insights: factor_insights(&features),
        potential: improvement_potential(credit_score),
        prediction,
    })
}

/// Rebuild the result page from a saved prediction file.
///
/// Insights and potential are derived from the stored input and score; nothing is redrawn.
pub fn load_prediction(path: &Path) -> Result<PredictionReport, AppError> {
    let prediction = crate::io::read_prediction_json(path)?;
    debug!(path = %path.display(), credit_score = prediction.credit_score, "loaded saved prediction");
    Ok(PredictionReport {
        insights: factor_insights(&prediction.input),
        potential: improvement_potential(prediction.credit_score),
        prediction,
    })
}

/// A generated or loaded dataset with its summary.
#[derive(Debug, Clone)]
pub struct DatasetRun {
    pub records: Vec<ScoredRecord>,
    /// `None` only for an empty dataset.
    pub stats: Option<DatasetStats>,
}

impl DatasetRun {
    pub fn new(records: Vec<ScoredRecord>) -> Self {
        let stats = compute_stats(&records);
        Self { records, stats }
    }
}

pub fn run_generate<R>(count: i64, rng: &mut R) -> Result<DatasetRun, AppError>
where
    R: RandomSource + ?Sized,
{
    let records = generate(count, rng)?;
    info!(count = records.len(), "generated dataset");
    Ok(DatasetRun::new(records))
}

/// Rescore every record's features under the generator profile, in parallel.
pub fn run_rescore(records: &[ScoredRecord], base_seed: u64) -> DatasetRun {
    let features: Vec<FeatureRecord> = records.iter().map(|r| r.features).collect();
    let rescored = score_batch(&features, ScoringProfile::Generator, base_seed);
    let changed = records
        .iter()
        .zip(&rescored)
        .filter(|(a, b)| a.credit_score != b.credit_score)
        .count();
    debug!(rows = rescored.len(), changed, "rescored dataset");
    DatasetRun::new(rescored)
}

pub fn run_training<R>(rng: &mut R) -> TrainingRun
where
    R: RandomSource + ?Sized,
{
    let run = simulate_training(rng);
    info!(best = %run.best_model().name, "training simulation complete");
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SequenceSource, rng_from_seed};
    use crate::domain::{CreditLevel, Gender, Location};
    use crate::error::ErrorKind;

    #[test]
    fn form_defaults_with_neutral_draws() {
        // Interactive profile: 650 +25 +5 +15 +0 +0 -6 +0 = 689; confidence 0.5*15+85.
        let report = run_prediction(FeatureRecord::default(), false, &mut SequenceSource::constant(0.5)).unwrap();
        let p = &report.prediction;
        assert_eq!(p.credit_score, 689);
        assert_eq!(p.credit_level, CreditLevel::Good);
        assert!((p.confidence - 92.5).abs() < 1e-9);
        assert_eq!(
            p.recommendations,
            vec!["Continue current financial practices".to_string()]
        );
        assert_eq!(report.potential.points, 100);
        assert_eq!(report.insights.len(), 5);
    }

    #[test]
    fn interactive_profile_thresholds_apply() {
        // 62 is "senior" only under the interactive profile; 3200 is "high" only there.
        let features = FeatureRecord {
            gender: Gender::Female,
            age: 62,
            location: Location::Rural,
            monthly_earnings: 3200.0,
            trip_frequency: 100,
            avg_rating: 4.0,
            consistency: 0.0,
        };
        let report = run_prediction(features, false, &mut SequenceSource::constant(0.5)).unwrap();
        // 650 -20 +30 = 660
        assert_eq!(report.prediction.credit_score, 660);
    }

    #[test]
    fn confidence_uses_second_draw() {
        let report =
            run_prediction(FeatureRecord::default(), false, &mut SequenceSource::new(vec![0.5, 0.0])).unwrap();
        assert!((report.prediction.confidence - 85.0).abs() < 1e-9);
    }

    #[test]
    fn validation_is_opt_in() {
        let bad = FeatureRecord { avg_rating: 9.0, ..FeatureRecord::default() };
        assert!(run_prediction(bad, false, &mut SequenceSource::constant(0.5)).is_ok());
        let err = run_prediction(bad, true, &mut SequenceSource::constant(0.5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn saved_prediction_renders_the_same_page() {
        let report = run_prediction(FeatureRecord::default(), false, &mut SequenceSource::constant(0.5)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prediction.json");
        crate::io::write_prediction_json(&path, &report.prediction).unwrap();

        let loaded = load_prediction(&path).unwrap();
        assert_eq!(loaded.prediction.credit_score, 689);
        assert_eq!(loaded.prediction.recommendations, report.prediction.recommendations);
        assert_eq!(loaded.potential, report.potential);
        assert_eq!(loaded.insights, report.insights);
    }

    #[test]
    fn missing_saved_prediction_is_io_error() {
        let err = load_prediction(Path::new("/nonexistent/prediction.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn generate_summarizes_dataset() {
        let run = run_generate(200, &mut rng_from_seed(Some(9))).unwrap();
        assert_eq!(run.records.len(), 200);
        assert_eq!(run.stats.as_ref().map(|s| s.total), Some(200));

        let empty = run_generate(0, &mut rng_from_seed(Some(9))).unwrap();
        assert!(empty.stats.is_none());
    }

    #[test]
    fn rescore_is_reproducible() {
        let run = run_generate(100, &mut rng_from_seed(Some(4))).unwrap();
        let a = run_rescore(&run.records, 77);
        let b = run_rescore(&run.records, 77);
        assert_eq!(a.records, b.records);
        assert!(a.records.iter().zip(&run.records).all(|(x, y)| x.features == y.features));
    }
}
