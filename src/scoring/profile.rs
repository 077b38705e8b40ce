//! Formula constants.
//!
//! The dataset generator and the interactive form disagree on two thresholds
//! (senior-age penalty and high-earnings bonus). Both are kept, selected by
//! `ScoringProfile`.

use serde::{Deserialize, Serialize};

pub const BASE_SCORE: f64 = 650.0;

pub const YOUNG_AGE_BELOW: i32 = 25;
pub const YOUNG_AGE_ADJUSTMENT: f64 = -30.0;
pub const SENIOR_AGE_ADJUSTMENT: f64 = -20.0;
pub const PRIME_AGE_MIN: i32 = 35;
pub const PRIME_AGE_MAX: i32 = 50;
pub const PRIME_AGE_ADJUSTMENT: f64 = 25.0;

/// Senior penalty applies strictly above this age (dataset generator).
pub const GENERATOR_SENIOR_AGE_ABOVE: i32 = 65;
/// Senior penalty applies strictly above this age (interactive form).
pub const INTERACTIVE_SENIOR_AGE_ABOVE: i32 = 60;

pub const MALE_ADJUSTMENT: f64 = 5.0;
pub const URBAN_ADJUSTMENT: f64 = 15.0;

pub const LOW_EARNINGS_BELOW: f64 = 2000.0;
pub const LOW_EARNINGS_ADJUSTMENT: f64 = -40.0;
pub const HIGH_EARNINGS_ADJUSTMENT: f64 = 30.0;
/// High-earnings bonus applies strictly above this amount (dataset generator).
pub const GENERATOR_HIGH_EARNINGS_ABOVE: f64 = 3500.0;
/// High-earnings bonus applies strictly above this amount (interactive form).
pub const INTERACTIVE_HIGH_EARNINGS_ABOVE: f64 = 3000.0;

pub const LOW_RATING_BELOW: f64 = 3.5;
pub const LOW_RATING_ADJUSTMENT: f64 = -35.0;
pub const HIGH_RATING_ABOVE: f64 = 4.5;
pub const HIGH_RATING_ADJUSTMENT: f64 = 25.0;

pub const CONSISTENCY_WEIGHT: f64 = 60.0;

pub const HIGH_TRIPS_ABOVE: i32 = 120;
pub const HIGH_TRIPS_ADJUSTMENT: f64 = 10.0;
pub const LOW_TRIPS_BELOW: i32 = 90;
pub const LOW_TRIPS_ADJUSTMENT: f64 = -15.0;

/// Jitter is `(U - 0.5) * JITTER_SPAN`, i.e. uniform in `[-20, +20)`.
pub const JITTER_SPAN: f64 = 40.0;

/// Which call site's thresholds to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// Labels synthetic and imported datasets (age > 65, earnings > 3500).
    #[default]
    Generator,
    /// Scores a single form submission (age > 60, earnings > 3000).
    Interactive,
}

impl ScoringProfile {
    pub fn senior_age_above(self) -> i32 {
        match self {
            ScoringProfile::Generator => GENERATOR_SENIOR_AGE_ABOVE,
            ScoringProfile::Interactive => INTERACTIVE_SENIOR_AGE_ABOVE,
        }
    }

    pub fn high_earnings_above(self) -> f64 {
        match self {
            ScoringProfile::Generator => GENERATOR_HIGH_EARNINGS_ABOVE,
            ScoringProfile::Interactive => INTERACTIVE_HIGH_EARNINGS_ABOVE,
        }
    }
}
