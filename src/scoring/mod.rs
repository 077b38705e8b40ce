//! The score formula.
//!
//! Responsibilities:
//!
//! - named thresholds for both call sites (`profile`)
//! - the additive formula, rounding and clamping (`calculator`)
//! - optional domain validation of inputs (`validate`)
//! - reproducible parallel scoring of many records (`batch`)

pub mod batch;
pub mod calculator;
pub mod profile;
pub mod validate;

pub use batch::*;
pub use calculator::*;
pub use profile::*;
pub use validate::*;
