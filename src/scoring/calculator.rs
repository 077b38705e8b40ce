//! Additive score formula.
//!
//! `base + age + gender + location + earnings + rating - consistency*60 + trips + jitter`,
//! then round (half up), then clamp to `[300, 850]`. Clamping is always last.
//!
//! The formula is total: any numeric input yields a score in range. Non-finite
//! totals land on `SCORE_MIN`.

use tracing::trace;

use crate::data::RandomSource;
use crate::domain::{
    CreditLevel, FeatureRecord, Gender, Location, SCORE_MAX, SCORE_MIN, ScoreBreakdown, ScoredRecord,
};
use crate::math::round_half_up;
use crate::scoring::profile::*;

/// Compute a score, consuming exactly one draw for the jitter.
pub fn compute_score<R>(record: &FeatureRecord, profile: ScoringProfile, rng: &mut R) -> u16
where
    R: RandomSource + ?Sized,
{
    finalize_score(score_breakdown(record, profile, rng).raw_total())
}

/// Score and label a record.
pub fn score_record<R>(record: FeatureRecord, profile: ScoringProfile, rng: &mut R) -> ScoredRecord
where
    R: RandomSource + ?Sized,
{
    let score = compute_score(&record, profile, rng);
    ScoredRecord::new(record, score)
}

/// Per-factor contributions including the jitter draw.
pub fn score_breakdown<R>(record: &FeatureRecord, profile: ScoringProfile, rng: &mut R) -> ScoreBreakdown
where
    R: RandomSource + ?Sized,
{
    let jitter = jitter_from_draw(rng.next_f64());
    breakdown_with_jitter(record, profile, jitter)
}

/// Deterministic part of the formula with a caller-chosen jitter.
pub fn breakdown_with_jitter(record: &FeatureRecord, profile: ScoringProfile, jitter: f64) -> ScoreBreakdown {
    let breakdown = ScoreBreakdown {
        base: BASE_SCORE,
        age: age_adjustment(record.age, profile),
        gender: gender_adjustment(record.gender),
        location: location_adjustment(record.location),
        earnings: earnings_adjustment(record.monthly_earnings, profile),
        rating: rating_adjustment(record.avg_rating),
        consistency: -record.consistency * CONSISTENCY_WEIGHT,
        trip_frequency: trip_adjustment(record.trip_frequency),
        jitter,
    };
    trace!(?profile, raw_total = breakdown.raw_total(), "score breakdown");
    breakdown
}

/// Map a uniform draw to the `[-20, +20)` jitter.
pub fn jitter_from_draw(u: f64) -> f64 {
    (u - 0.5) * JITTER_SPAN
}

/// Round, then clamp to `[SCORE_MIN, SCORE_MAX]`.
pub fn finalize_score(raw_total: f64) -> u16 {
    // `f64::max` discards NaN, so NaN totals clamp to the floor.
    let clamped = round_half_up(raw_total)
        .max(SCORE_MIN as f64)
        .min(SCORE_MAX as f64);
    clamped as u16
}

pub fn score_to_level(score: u16) -> CreditLevel {
    CreditLevel::from_score(score)
}

fn age_adjustment(age: i32, profile: ScoringProfile) -> f64 {
    if age < YOUNG_AGE_BELOW {
        YOUNG_AGE_ADJUSTMENT
    } else if age > profile.senior_age_above() {
        SENIOR_AGE_ADJUSTMENT
    } else if (PRIME_AGE_MIN..=PRIME_AGE_MAX).contains(&age) {
        PRIME_AGE_ADJUSTMENT
    } else {
        0.0
    }
}

fn gender_adjustment(gender: Gender) -> f64 {
    match gender {
        Gender::Male => MALE_ADJUSTMENT,
        Gender::Female => 0.0,
    }
}

fn location_adjustment(location: Location) -> f64 {
    match location {
        Location::Urban => URBAN_ADJUSTMENT,
        Location::Rural => 0.0,
    }
}

fn earnings_adjustment(earnings: f64, profile: ScoringProfile) -> f64 {
    if earnings < LOW_EARNINGS_BELOW {
        LOW_EARNINGS_ADJUSTMENT
    } else if earnings > profile.high_earnings_above() {
        HIGH_EARNINGS_ADJUSTMENT
    } else {
        0.0
    }
}

fn rating_adjustment(rating: f64) -> f64 {
    if rating < LOW_RATING_BELOW {
        LOW_RATING_ADJUSTMENT
    } else if rating > HIGH_RATING_ABOVE {
        HIGH_RATING_ADJUSTMENT
    } else {
        0.0
    }
}

fn trip_adjustment(trips: i32) -> f64 {
    if trips > HIGH_TRIPS_ABOVE {
        HIGH_TRIPS_ADJUSTMENT
    } else if trips < LOW_TRIPS_BELOW {
        LOW_TRIPS_ADJUSTMENT
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SequenceSource;

    fn zero_jitter() -> SequenceSource {
        SequenceSource::constant(0.5)
    }

    fn form_record(consistency: f64) -> FeatureRecord {
        FeatureRecord {
            gender: Gender::Male,
            age: 35,
            location: Location::Urban,
            monthly_earnings: 2500.0,
            trip_frequency: 105,
            avg_rating: 4.0,
            consistency,
        }
    }

    #[test]
    fn form_defaults_score_689_good() {
        let record = form_record(0.10);
        for profile in [ScoringProfile::Generator, ScoringProfile::Interactive] {
            let score = compute_score(&record, profile, &mut zero_jitter());
            assert_eq!(score, 689);
            assert_eq!(score_to_level(score), CreditLevel::Good);
        }
    }

    #[test]
    fn high_consistency_penalty_drops_to_fair() {
        let score = compute_score(&form_record(0.50), ScoringProfile::Interactive, &mut zero_jitter());
        assert_eq!(score, 665);
        assert_eq!(score_to_level(score), CreditLevel::Fair);
    }

    #[test]
    fn profiles_differ_only_at_their_thresholds() {
        let mut record = form_record(0.0);
        record.age = 62;
        record.monthly_earnings = 3200.0;

        let generator = breakdown_with_jitter(&record, ScoringProfile::Generator, 0.0);
        let interactive = breakdown_with_jitter(&record, ScoringProfile::Interactive, 0.0);

        assert_eq!(generator.age, 0.0);
        assert_eq!(interactive.age, SENIOR_AGE_ADJUSTMENT);
        assert_eq!(generator.earnings, 0.0);
        assert_eq!(interactive.earnings, HIGH_EARNINGS_ADJUSTMENT);
    }

    #[test]
    fn age_bands() {
        let p = ScoringProfile::Generator;
        assert_eq!(age_adjustment(18, p), -30.0);
        assert_eq!(age_adjustment(24, p), -30.0);
        assert_eq!(age_adjustment(25, p), 0.0);
        assert_eq!(age_adjustment(35, p), 25.0);
        assert_eq!(age_adjustment(50, p), 25.0);
        assert_eq!(age_adjustment(51, p), 0.0);
        assert_eq!(age_adjustment(65, p), 0.0);
        assert_eq!(age_adjustment(66, p), -20.0);
        assert_eq!(age_adjustment(80, p), -20.0);
    }

    #[test]
    fn jitter_spans_plus_minus_twenty() {
        assert_eq!(jitter_from_draw(0.0), -20.0);
        assert_eq!(jitter_from_draw(0.5), 0.0);
        assert!(jitter_from_draw(0.999_999) < 20.0);
    }

    #[test]
    fn jitter_is_added_before_rounding() {
        // 689 + (0.515625 - 0.5) * 40 = 689.625 -> 690.
        let mut rng = SequenceSource::constant(0.515_625);
        assert_eq!(compute_score(&form_record(0.10), ScoringProfile::Generator, &mut rng), 690);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let b = breakdown_with_jitter(&form_record(0.10), ScoringProfile::Interactive, 3.25);
        assert!((b.raw_total() - (689.0 + 3.25)).abs() < 1e-9);
        let factor_sum: f64 = b.factors().iter().map(|(_, v)| v).sum();
        assert!((b.base + factor_sum + b.jitter - b.raw_total()).abs() < 1e-9);
    }

    #[test]
    fn extreme_inputs_stay_in_range() {
        let extremes = [
            (18, 0.0, 1.0, 5.0, 0),
            (80, 0.0, 1.0, 5.0, 0),
            (18, 1e9, 5.0, 0.0, 500),
            (80, 1e9, 1.0, 1.0, 10),
            (-5, -1e9, -10.0, 1e6, -3),
            (40, f64::NAN, f64::NAN, f64::NAN, 100),
            (40, f64::INFINITY, 5.0, f64::NEG_INFINITY, 100),
        ];
        for draw in [0.0, 0.5, 0.999] {
            for &(age, earnings, rating, consistency, trips) in &extremes {
                let record = FeatureRecord {
                    gender: Gender::Female,
                    age,
                    location: Location::Rural,
                    monthly_earnings: earnings,
                    trip_frequency: trips,
                    avg_rating: rating,
                    consistency,
                };
                let score = compute_score(&record, ScoringProfile::Generator, &mut SequenceSource::constant(draw));
                assert!((SCORE_MIN..=SCORE_MAX).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(finalize_score(10_000.0), SCORE_MAX);
        assert_eq!(finalize_score(-10_000.0), SCORE_MIN);
        assert_eq!(finalize_score(f64::NAN), SCORE_MIN);
        assert_eq!(finalize_score(299.5), 300);
        assert_eq!(finalize_score(850.4), 850);
    }
}
