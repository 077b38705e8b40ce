//! Simulated model "training".
//!
//! There is no model fitting here. Each algorithm in a static catalog gets a
//! baseline accuracy and training time, perturbed by jitter, and the best entry
//! is selected by accuracy. A real binary-classification evaluator is included
//! for callers that do have predictions.
//!
//! - algorithm catalog (`catalog`)
//! - jittered results + best-model selection (`simulate`)
//! - confusion-matrix metrics (`metrics`)

pub mod catalog;
pub mod metrics;
pub mod simulate;

pub use catalog::*;
pub use metrics::*;
pub use simulate::*;
