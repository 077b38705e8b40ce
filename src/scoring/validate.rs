//! Opt-in domain checks for feature records.
//!
//! The formula itself never rejects input; callers that want to refuse
//! nonsensical form values run `validate_features` first.

use crate::domain::FeatureRecord;
use crate::error::AppError;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

pub fn validate_features(record: &FeatureRecord) -> Result<(), AppError> {
    if record.age < 0 {
        return Err(AppError::invalid_input(format!(
            "Invalid age {} (must be non-negative).",
            record.age
        )));
    }
    if !(record.monthly_earnings.is_finite() && record.monthly_earnings > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Invalid monthly_earnings {} (must be finite and > 0).",
            record.monthly_earnings
        )));
    }
    if !(record.avg_rating.is_finite() && (RATING_MIN..=RATING_MAX).contains(&record.avg_rating)) {
        return Err(AppError::invalid_input(format!(
            "Invalid avg_rating {} (must be within [{RATING_MIN}, {RATING_MAX}]).",
            record.avg_rating
        )));
    }
    if !(record.consistency.is_finite() && (0.0..=1.0).contains(&record.consistency)) {
        return Err(AppError::invalid_input(format!(
            "Invalid consistency {} (must be within [0, 1]).",
            record.consistency
        )));
    }
    if record.trip_frequency < 0 {
        return Err(AppError::invalid_input(format!(
            "Invalid trip_frequency {} (must be non-negative).",
            record.trip_frequency
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn form_defaults_are_valid() {
        assert!(validate_features(&FeatureRecord::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_domain_values() {
        let cases = [
            FeatureRecord { age: -1, ..FeatureRecord::default() },
            FeatureRecord { monthly_earnings: 0.0, ..FeatureRecord::default() },
            FeatureRecord { monthly_earnings: -20.0, ..FeatureRecord::default() },
            FeatureRecord { avg_rating: 5.5, ..FeatureRecord::default() },
            FeatureRecord { avg_rating: 0.5, ..FeatureRecord::default() },
            FeatureRecord { consistency: f64::NAN, ..FeatureRecord::default() },
        ];
        for record in cases {
            let err = validate_features(&record).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }
}
