//! Shared domain types.
//!
//! These types are intentionally small `Copy`/`Clone` values that serialize cleanly,
//! so they can be:
//!
//! - produced in bulk by the dataset generator
//! - exported to CSV/JSON
//! - reloaded from a CSV for statistics or rescoring

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lowest score the formula can produce.
pub const SCORE_MIN: u16 = 300;
/// Highest score the formula can produce.
pub const SCORE_MAX: u16 = 850;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn display_name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("Unknown gender '{other}' (expected Male or Female).")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Location {
    Urban,
    Rural,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Urban, Location::Rural];

    pub fn display_name(self) -> &'static str {
        match self {
            Location::Urban => "Urban",
            Location::Rural => "Rural",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urban" => Ok(Location::Urban),
            "rural" => Ok(Location::Rural),
            other => Err(format!("Unknown location '{other}' (expected Urban or Rural).")),
        }
    }
}

/// One subject's input attributes.
///
/// `consistency` is a penalty term: `0.0` is perfectly consistent, larger is worse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub gender: Gender,
    pub age: i32,
    pub location: Location,
    pub monthly_earnings: f64,
    pub trip_frequency: i32,
    pub avg_rating: f64,
    pub consistency: f64,
}

impl Default for FeatureRecord {
    /// The pre-filled values of the prediction form.
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 35,
            location: Location::Urban,
            monthly_earnings: 2500.0,
            trip_frequency: 105,
            avg_rating: 4.0,
            consistency: 0.10,
        }
    }
}

/// Four-band categorical label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditLevel {
    /// Ordered from worst to best.
    pub const ALL: [CreditLevel; 4] = [
        CreditLevel::Poor,
        CreditLevel::Fair,
        CreditLevel::Good,
        CreditLevel::Excellent,
    ];

    /// Lower bound (inclusive) of the `Fair` band.
    pub const FAIR_FROM: u16 = 580;
    /// Lower bound (inclusive) of the `Good` band.
    pub const GOOD_FROM: u16 = 670;
    /// Lower bound (inclusive) of the `Excellent` band.
    pub const EXCELLENT_FROM: u16 = 740;

    /// Map a score to its band. Total over every `u16`.
    pub fn from_score(score: u16) -> Self {
        if score >= Self::EXCELLENT_FROM {
            CreditLevel::Excellent
        } else if score >= Self::GOOD_FROM {
            CreditLevel::Good
        } else if score >= Self::FAIR_FROM {
            CreditLevel::Fair
        } else {
            CreditLevel::Poor
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CreditLevel::Poor => "Poor",
            CreditLevel::Fair => "Fair",
            CreditLevel::Good => "Good",
            CreditLevel::Excellent => "Excellent",
        }
    }

    /// Label with the score range, as shown in distribution charts.
    pub fn band_label(self) -> &'static str {
        match self {
            CreditLevel::Poor => "Poor (<580)",
            CreditLevel::Fair => "Fair (580-669)",
            CreditLevel::Good => "Good (670-739)",
            CreditLevel::Excellent => "Excellent (740-850)",
        }
    }

    pub fn grade(self) -> &'static str {
        match self {
            CreditLevel::Poor => "D",
            CreditLevel::Fair => "C",
            CreditLevel::Good => "B+",
            CreditLevel::Excellent => "A+",
        }
    }

    pub fn risk_summary(self) -> &'static str {
        match self {
            CreditLevel::Poor => "High Risk - Not Recommended",
            CreditLevel::Fair => "Moderate Risk - Conditional",
            CreditLevel::Good => "Low Risk - Recommended",
            CreditLevel::Excellent => "Very Low Risk - Highly Recommended",
        }
    }
}

impl fmt::Display for CreditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A feature record labeled with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub features: FeatureRecord,
    pub credit_score: u16,
}

impl ScoredRecord {
    pub fn new(features: FeatureRecord, credit_score: u16) -> Self {
        Self {
            features,
            credit_score,
        }
    }

    /// Always derived from the score, never stored.
    pub fn credit_level(&self) -> CreditLevel {
        CreditLevel::from_score(self.credit_score)
    }
}

/// Signed contribution of each factor to the unclamped total.
///
/// `base + sum(contributions)` equals the pre-rounding total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub age: f64,
    pub gender: f64,
    pub location: f64,
    pub earnings: f64,
    pub rating: f64,
    pub consistency: f64,
    pub trip_frequency: f64,
    pub jitter: f64,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> f64 {
        self.base
            + self.age
            + self.gender
            + self.location
            + self.earnings
            + self.rating
            + self.consistency
            + self.trip_frequency
            + self.jitter
    }

    /// `(label, contribution)` pairs in formula order, base and jitter excluded.
    pub fn factors(&self) -> [(&'static str, f64); 7] {
        [
            ("age", self.age),
            ("gender", self.gender),
            ("location", self.location),
            ("earnings", self.earnings),
            ("rating", self.rating),
            ("consistency", self.consistency),
            ("trip_frequency", self.trip_frequency),
        ]
    }
}

/// Result of the interactive prediction flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub input: FeatureRecord,
    pub credit_score: u16,
    pub credit_level: CreditLevel,
    /// Cosmetic confidence percentage in `[85, 100)`.
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
    pub generated_at: DateTime<Utc>,
}
