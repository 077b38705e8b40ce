//! Domain types shared by the scoring, generation, and advice modules.
//!
//! This module defines:
//!
//! - the seven-attribute subject description (`FeatureRecord`)
//! - the labeled output of the score formula (`ScoredRecord`, `CreditLevel`)
//! - the interactive prediction result (`Prediction`)

pub mod types;

pub use types::*;
