//! Recommendation rules.
//!
//! Rules are evaluated independently and every match is kept, in this order:
//!
//! 1. rating below 4.0
//! 2. consistency at or above 0.15 (higher consistency values are worse)
//! 3. earnings below 2500
//! 4. trip frequency above 110 (positive framing)
//! 5. score band: <580, <670, or >=740
//!
//! If nothing fires the result is the single `ContinuePractices` entry, so the
//! output is never empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{CreditLevel, FeatureRecord};

pub const RATING_ADVICE_BELOW: f64 = 4.0;
pub const CONSISTENCY_ADVICE_FROM: f64 = 0.15;
pub const EARNINGS_ADVICE_BELOW: f64 = 2500.0;
pub const ACTIVITY_ADVICE_ABOVE: i32 = 110;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    ImproveRatings,
    ImproveReliability,
    IncreaseEarnings,
    MaintainActivity,
    ComprehensiveImprovement,
    BuildFinancialHabits,
    MaintainExcellence,
    ContinuePractices,
}

impl Advice {
    pub fn message(self) -> &'static str {
        match self {
            Advice::ImproveRatings => "Improve service quality and customer satisfaction ratings",
            Advice::ImproveReliability => "Focus on maintaining consistent performance and reliability",
            Advice::IncreaseEarnings => "Consider strategies to increase monthly earnings",
            Advice::MaintainActivity => "Maintain high activity levels for better credit profile",
            Advice::ComprehensiveImprovement => "Focus on comprehensive credit improvement strategies",
            Advice::BuildFinancialHabits => "Work on building stronger financial habits",
            Advice::MaintainExcellence => "Excellent credit profile - maintain current practices",
            Advice::ContinuePractices => "Continue current financial practices",
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Ordered, non-empty advice for a record and its score.
pub fn recommend(record: &FeatureRecord, score: u16) -> Vec<Advice> {
    let mut advice = Vec::new();

    if record.avg_rating < RATING_ADVICE_BELOW {
        advice.push(Advice::ImproveRatings);
    }
    if record.consistency >= CONSISTENCY_ADVICE_FROM {
        advice.push(Advice::ImproveReliability);
    }
    if record.monthly_earnings < EARNINGS_ADVICE_BELOW {
        advice.push(Advice::IncreaseEarnings);
    }
    if record.trip_frequency > ACTIVITY_ADVICE_ABOVE {
        advice.push(Advice::MaintainActivity);
    }

    if score < CreditLevel::FAIR_FROM {
        advice.push(Advice::ComprehensiveImprovement);
    } else if score < CreditLevel::GOOD_FROM {
        advice.push(Advice::BuildFinancialHabits);
    } else if score >= CreditLevel::EXCELLENT_FROM {
        advice.push(Advice::MaintainExcellence);
    }

    if advice.is_empty() {
        advice.push(Advice::ContinuePractices);
    }
    advice
}

/// `recommend` rendered to display strings.
pub fn recommend_messages(record: &FeatureRecord, score: u16) -> Vec<String> {
    recommend(record, score)
        .into_iter()
        .map(|a| a.message().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Location};

    fn strong_record() -> FeatureRecord {
        FeatureRecord {
            gender: Gender::Male,
            age: 40,
            location: Location::Urban,
            monthly_earnings: 5000.0,
            trip_frequency: 115,
            avg_rating: 5.0,
            consistency: 0.0,
        }
    }

    #[test]
    fn excellent_profile_keeps_positive_messages_only() {
        let advice = recommend(&strong_record(), 760);
        assert_eq!(advice, vec![Advice::MaintainActivity, Advice::MaintainExcellence]);
        assert!(!advice.contains(&Advice::ImproveRatings));
        assert!(!advice.contains(&Advice::ImproveReliability));
        assert!(!advice.contains(&Advice::IncreaseEarnings));
    }

    #[test]
    fn falls_back_to_default_when_nothing_fires() {
        let record = FeatureRecord {
            trip_frequency: 100,
            ..strong_record()
        };
        assert_eq!(recommend(&record, 700), vec![Advice::ContinuePractices]);
        assert_eq!(
            recommend_messages(&record, 700),
            vec!["Continue current financial practices".to_string()]
        );
    }

    #[test]
    fn all_feature_rules_fire_in_order() {
        let record = FeatureRecord {
            gender: Gender::Female,
            age: 22,
            location: Location::Rural,
            monthly_earnings: 1800.0,
            trip_frequency: 125,
            avg_rating: 3.2,
            consistency: 0.3,
        };
        assert_eq!(
            recommend(&record, 540),
            vec![
                Advice::ImproveRatings,
                Advice::ImproveReliability,
                Advice::IncreaseEarnings,
                Advice::MaintainActivity,
                Advice::ComprehensiveImprovement,
            ]
        );
    }

    #[test]
    fn consistency_rule_fires_at_threshold() {
        let at = FeatureRecord { consistency: 0.15, ..strong_record() };
        let below = FeatureRecord { consistency: 0.149, ..strong_record() };
        assert!(recommend(&at, 700).contains(&Advice::ImproveReliability));
        assert!(!recommend(&below, 700).contains(&Advice::ImproveReliability));
    }

    #[test]
    fn score_band_messages() {
        let record = FeatureRecord { trip_frequency: 100, ..strong_record() };
        assert_eq!(recommend(&record, 579), vec![Advice::ComprehensiveImprovement]);
        assert_eq!(recommend(&record, 580), vec![Advice::BuildFinancialHabits]);
        assert_eq!(recommend(&record, 669), vec![Advice::BuildFinancialHabits]);
        assert_eq!(recommend(&record, 739), vec![Advice::ContinuePractices]);
        assert_eq!(recommend(&record, 740), vec![Advice::MaintainExcellence]);
    }
}
