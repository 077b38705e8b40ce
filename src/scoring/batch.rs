//! Parallel scoring of many records.
//!
//! Each record gets its own RNG seeded from `(base_seed, index)`, so the output
//! does not depend on how rayon schedules the work.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::data::derive_seed;
use crate::domain::{FeatureRecord, ScoredRecord};
use crate::scoring::{ScoringProfile, score_record};

pub fn score_batch(records: &[FeatureRecord], profile: ScoringProfile, base_seed: u64) -> Vec<ScoredRecord> {
    records
        .par_iter()
        .enumerate()
        .map(|(idx, record)| {
            let mut rng = StdRng::seed_from_u64(derive_seed(base_seed, idx as u64));
            score_record(*record, profile, &mut rng)
        })
        .collect()
}
