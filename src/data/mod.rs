//! Randomness sources and synthetic dataset generation.

pub mod generator;
pub mod source;

pub use generator::*;
pub use source::*;
