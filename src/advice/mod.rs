//! Human-readable guidance derived from a record and its score.
//!
//! - ordered improvement suggestions (`rules`)
//! - per-feature assessments and improvement potential (`insights`)

pub mod insights;
pub mod rules;

pub use insights::*;
pub use rules::*;
