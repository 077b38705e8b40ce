//! Per-feature assessments shown next to a prediction.

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureRecord, SCORE_MAX};

/// Maximum projected gain shown as "improvement potential".
pub const MAX_IMPROVEMENT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    Good,
    Warning,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorInsight {
    pub factor: &'static str,
    pub value: f64,
    pub assessment: Assessment,
    pub message: &'static str,
    /// Target range as shown to the user.
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementPotential {
    pub points: u16,
    pub projected_score: u16,
}

pub fn factor_insights(record: &FeatureRecord) -> Vec<FactorInsight> {
    vec![
        age_insight(record.age),
        earnings_insight(record.monthly_earnings),
        rating_insight(record.avg_rating),
        consistency_insight(record.consistency),
        activity_insight(record.trip_frequency),
    ]
}

pub fn improvement_potential(score: u16) -> ImprovementPotential {
    let points = SCORE_MAX.saturating_sub(score).min(MAX_IMPROVEMENT);
    ImprovementPotential {
        points,
        projected_score: score.saturating_add(MAX_IMPROVEMENT).min(SCORE_MAX),
    }
}

fn age_insight(age: i32) -> FactorInsight {
    let (assessment, message) = if (25..=60).contains(&age) {
        (Assessment::Good, "Optimal age range for credit")
    } else {
        (Assessment::Warning, "Age may impact credit score")
    };
    FactorInsight {
        factor: "age",
        value: age as f64,
        assessment,
        message,
        target: "25-60 (Optimal)",
    }
}

fn earnings_insight(earnings: f64) -> FactorInsight {
    let (assessment, message) = if earnings >= 3000.0 {
        (Assessment::Good, "Strong earning capacity")
    } else if earnings >= 2000.0 {
        (Assessment::Warning, "Moderate earnings")
    } else {
        (Assessment::Poor, "Low earnings may affect score")
    };
    FactorInsight {
        factor: "monthly_earnings",
        value: earnings,
        assessment,
        message,
        target: "$3000+ (Excellent)",
    }
}

fn rating_insight(rating: f64) -> FactorInsight {
    let (assessment, message) = if rating >= 4.5 {
        (Assessment::Good, "Excellent service rating")
    } else if rating >= 3.5 {
        (Assessment::Warning, "Good service rating")
    } else {
        (Assessment::Poor, "Rating needs improvement")
    };
    FactorInsight {
        factor: "avg_rating",
        value: rating,
        assessment,
        message,
        target: "4.5+ (Excellent)",
    }
}

fn consistency_insight(consistency: f64) -> FactorInsight {
    let (assessment, message) = if consistency <= 0.1 {
        (Assessment::Good, "Excellent consistency")
    } else if consistency <= 0.2 {
        (Assessment::Warning, "Good consistency")
    } else {
        (Assessment::Poor, "Consistency needs improvement")
    };
    FactorInsight {
        factor: "consistency",
        value: consistency,
        assessment,
        message,
        target: "0.0-0.1 (Excellent)",
    }
}

fn activity_insight(trips: i32) -> FactorInsight {
    let (assessment, message) = if trips >= 100 {
        (Assessment::Good, "High activity level")
    } else if trips >= 80 {
        (Assessment::Warning, "Moderate activity")
    } else {
        (Assessment::Poor, "Low activity may affect score")
    };
    FactorInsight {
        factor: "trip_frequency",
        value: trips as f64,
        assessment,
        message,
        target: "100+ (Optimal)",
    }
}
