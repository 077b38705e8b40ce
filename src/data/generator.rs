//! Synthetic labeled dataset generation.
//!
//! Each record consumes exactly eight uniform draws, in this order:
//! gender, age, location, earnings, trips, rating, consistency, score jitter.
//! The order only matters for reproducibility under a seeded source.

use tracing::debug;

use crate::data::RandomSource;
use crate::domain::{FeatureRecord, Gender, Location, ScoredRecord};
use crate::error::AppError;
use crate::math::round_to;
use crate::scoring::{ScoringProfile, score_record};

pub const AGE_MIN: i32 = 18;
/// Number of distinct ages drawn (`18..=79`).
pub const AGE_SPAN: f64 = 62.0;
/// `location` is Urban when the draw exceeds this (Urban 40% / Rural 60%).
pub const URBAN_DRAW_ABOVE: f64 = 0.6;
/// `gender` is Male when the draw exceeds this.
pub const MALE_DRAW_ABOVE: f64 = 0.5;

pub const EARNINGS_BASE_MIN: f64 = 1500.0;
pub const EARNINGS_BASE_SPAN: f64 = 2000.0;
/// Bonus for `PEAK_EARNING_AGE_ABOVE < age < PEAK_EARNING_AGE_BELOW`.
pub const PEAK_EARNINGS_BONUS: f64 = 500.0;
pub const PEAK_EARNING_AGE_ABOVE: i32 = 30;
pub const PEAK_EARNING_AGE_BELOW: i32 = 55;
pub const URBAN_EARNINGS_BONUS: f64 = 300.0;

pub const TRIPS_MIN: i32 = 80;
pub const TRIPS_SPAN: f64 = 50.0;
pub const RATING_MIN: f64 = 3.0;
pub const RATING_SPAN: f64 = 2.0;
pub const CONSISTENCY_SPAN: f64 = 0.4;

/// Validate a caller-supplied (possibly negative) record count.
pub fn checked_count(count: i64) -> Result<usize, AppError> {
    if count < 0 {
        return Err(AppError::invalid_argument(format!(
            "Record count must be non-negative (got {count})."
        )));
    }
    usize::try_from(count)
        .map_err(|_| AppError::invalid_argument(format!("Record count {count} is too large.")))
}

/// Generate `count` labeled records. Negative counts are rejected with `InvalidArgument`.
pub fn generate<R>(count: i64, rng: &mut R) -> Result<Vec<ScoredRecord>, AppError>
where
    R: RandomSource + ?Sized,
{
    let count = checked_count(count)?;
    Ok(generate_dataset(count, rng))
}

/// Generate exactly `count` labeled records, eagerly.
pub fn generate_dataset<R>(count: usize, rng: &mut R) -> Vec<ScoredRecord>
where
    R: RandomSource + ?Sized,
{
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(generate_record(rng));
    }
    debug!(count, "generated synthetic dataset");
    records
}

pub fn generate_record<R>(rng: &mut R) -> ScoredRecord
where
    R: RandomSource + ?Sized,
{
    let features = generate_features(rng);
    score_record(features, ScoringProfile::Generator, rng)
}

/// Draw the seven features (seven draws, no jitter).
pub fn generate_features<R>(rng: &mut R) -> FeatureRecord
where
    R: RandomSource + ?Sized,
{
    let gender = if rng.next_f64() > MALE_DRAW_ABOVE {
        Gender::Male
    } else {
        Gender::Female
    };
    let age = AGE_MIN + (rng.next_f64() * AGE_SPAN).floor() as i32;
    let location = if rng.next_f64() > URBAN_DRAW_ABOVE {
        Location::Urban
    } else {
        Location::Rural
    };

    // Earnings correlate with age and location.
    let mut earnings = EARNINGS_BASE_MIN + rng.next_f64() * EARNINGS_BASE_SPAN;
    if age > PEAK_EARNING_AGE_ABOVE && age < PEAK_EARNING_AGE_BELOW {
        earnings += PEAK_EARNINGS_BONUS;
    }
    if location == Location::Urban {
        earnings += URBAN_EARNINGS_BONUS;
    }
    let monthly_earnings = round_to(earnings, 2);

    let trip_frequency = TRIPS_MIN + (rng.next_f64() * TRIPS_SPAN).floor() as i32;
    let avg_rating = round_to(RATING_MIN + rng.next_f64() * RATING_SPAN, 2);
    let consistency = round_to(rng.next_f64() * CONSISTENCY_SPAN, 2);

    FeatureRecord {
        gender,
        age,
        location,
        monthly_earnings,
        trip_frequency,
        avg_rating,
        consistency,
    }
}
