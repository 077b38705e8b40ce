//! Small numeric helpers shared by scoring, generation, and reporting.

pub mod rounding;

pub use rounding::*;
