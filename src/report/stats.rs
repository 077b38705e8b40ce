//! Summary statistics over a labeled dataset.

use std::fmt;

use serde::Serialize;

use crate::domain::{CreditLevel, Gender, Location, ScoredRecord};
use crate::math::{mean, round_to};

/// Age buckets used by the distribution views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeGroup {
    #[serde(rename = "18-29")]
    Under30,
    #[serde(rename = "30-39")]
    Thirties,
    #[serde(rename = "40-49")]
    Forties,
    #[serde(rename = "50-59")]
    Fifties,
    #[serde(rename = "60+")]
    SixtyPlus,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Under30,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::Fifties,
        AgeGroup::SixtyPlus,
    ];

    /// Ages below 18 (only possible through ingest) fall in the first bucket.
    pub fn from_age(age: i32) -> Self {
        if age < 30 {
            AgeGroup::Under30
        } else if age < 40 {
            AgeGroup::Thirties
        } else if age < 50 {
            AgeGroup::Forties
        } else if age < 60 {
            AgeGroup::Fifties
        } else {
            AgeGroup::SixtyPlus
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Under30 => "18-29",
            AgeGroup::Thirties => "30-39",
            AgeGroup::Forties => "40-49",
            AgeGroup::Fifties => "50-59",
            AgeGroup::SixtyPlus => "60+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    pub gender_counts: Vec<(Gender, usize)>,
    pub location_counts: Vec<(Location, usize)>,
    pub mean_age: f64,
    pub mean_earnings: f64,
    pub mean_rating: f64,
    pub mean_credit_score: f64,
    pub age_groups: Vec<(AgeGroup, usize)>,
    pub level_counts: Vec<(CreditLevel, usize)>,
}

impl DatasetStats {
    pub fn count_for_gender(&self, gender: Gender) -> usize {
        lookup(&self.gender_counts, &gender)
    }

    pub fn count_for_location(&self, location: Location) -> usize {
        lookup(&self.location_counts, &location)
    }

    pub fn count_for_age_group(&self, group: AgeGroup) -> usize {
        lookup(&self.age_groups, &group)
    }

    pub fn count_for_level(&self, level: CreditLevel) -> usize {
        lookup(&self.level_counts, &level)
    }
}

fn lookup<K: PartialEq>(counts: &[(K, usize)], key: &K) -> usize {
    counts
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

/// Compute dataset statistics. Returns `None` for an empty dataset.
///
/// Every category appears in the count vectors (zero counts included), in
/// the enum's canonical order.
pub fn compute_stats(records: &[ScoredRecord]) -> Option<DatasetStats> {
    if records.is_empty() {
        return None;
    }

    let mean2 = |values: Vec<f64>| mean(values).map(|m| round_to(m, 2)).unwrap_or(0.0);

    let gender_counts = Gender::ALL
        .iter()
        .map(|&g| (g, records.iter().filter(|r| r.features.gender == g).count()))
        .collect();
    let location_counts = Location::ALL
        .iter()
        .map(|&l| (l, records.iter().filter(|r| r.features.location == l).count()))
        .collect();
    let age_groups = AgeGroup::ALL
        .iter()
        .map(|&g| {
            let n = records
                .iter()
                .filter(|r| AgeGroup::from_age(r.features.age) == g)
                .count();
            (g, n)
        })
        .collect();
    let level_counts = CreditLevel::ALL
        .iter()
        .map(|&lvl| (lvl, records.iter().filter(|r| r.credit_level() == lvl).count()))
        .collect();

    Some(DatasetStats {
        total: records.len(),
        gender_counts,
        location_counts,
        mean_age: mean2(records.iter().map(|r| r.features.age as f64).collect()),
        mean_earnings: mean2(records.iter().map(|r| r.features.monthly_earnings).collect()),
        mean_rating: mean2(records.iter().map(|r| r.features.avg_rating).collect()),
        mean_credit_score: mean2(records.iter().map(|r| r.credit_score as f64).collect()),
        age_groups,
        level_counts,
    })
}
