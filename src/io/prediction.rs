//! Read/write prediction JSON files.
//!
//! A prediction file carries the input form, score, level, confidence,
//! recommendations and the per-factor breakdown, so a result can be archived
//! or re-rendered later. The schema is `domain::Prediction`.

use std::fs::File;
use std::path::Path;

use crate::domain::Prediction;
use crate::error::AppError;

/// Write a prediction JSON file.
pub fn write_prediction_json(path: &Path, prediction: &Prediction) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create prediction JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, prediction)
        .map_err(|e| AppError::io(format!("Failed to write prediction JSON: {e}")))?;
    Ok(())
}

/// Read a prediction JSON file.
pub fn read_prediction_json(path: &Path) -> Result<Prediction, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open prediction JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid prediction JSON: {e}")))
}

/// Pretty JSON for stdout.
pub fn prediction_to_json(prediction: &Prediction) -> Result<String, AppError> {
    serde_json::to_string_pretty(prediction)
        .map_err(|e| AppError::io(format!("Failed to serialize prediction: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::recommend_messages;
    use crate::data::SequenceSource;
    use crate::domain::{CreditLevel, FeatureRecord};
    use crate::scoring::{ScoringProfile, score_breakdown};
    use chrono::Utc;

    fn sample() -> Prediction {
        let input = FeatureRecord::default();
        Prediction {
            input,
            credit_score: 665,
            credit_level: CreditLevel::Fair,
            confidence: 91.25,
            recommendations: recommend_messages(&input, 665),
            breakdown: score_breakdown(&input, ScoringProfile::Interactive, &mut SequenceSource::constant(0.5)),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn file_round_trip_preserves_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prediction.json");
        let prediction = sample();

        write_prediction_json(&path, &prediction).unwrap();
        let loaded = read_prediction_json(&path).unwrap();

        assert_eq!(loaded.credit_score, 665);
        assert_eq!(loaded.credit_level, CreditLevel::Fair);
        assert_eq!(loaded.recommendations, prediction.recommendations);
        assert_eq!(loaded.input, prediction.input);
        assert_eq!(loaded.generated_at, prediction.generated_at);
    }

    #[test]
    fn json_uses_flat_field_names() {
        let json = prediction_to_json(&sample()).unwrap();
        assert!(json.contains("\"credit_score\": 665"));
        assert!(json.contains("\"credit_level\": \"Fair\""));
        assert!(json.contains("\"monthly_earnings\": 2500.0"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_prediction_json(Path::new("/nonexistent/prediction.json")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Io);
    }
}
