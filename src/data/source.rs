//! Explicit randomness.
//!
//! Every stochastic function in the crate takes a `RandomSource` argument instead
//! of reaching for a global RNG, so a seeded source reproduces a run exactly.

use rand::prelude::*;
use rand::rngs::{StdRng, ThreadRng};

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Used to pin the jitter (or any other draw) in tests and golden fixtures.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    draws: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    /// Draws outside `[0, 1)` are clamped into range; an empty list behaves like `[0.5]`.
    pub fn new(draws: Vec<f64>) -> Self {
        let draws = if draws.is_empty() {
            vec![0.5]
        } else {
            draws.into_iter().map(|d| d.clamp(0.0, 1.0 - f64::EPSILON)).collect()
        };
        Self { draws, pos: 0 }
    }

    /// Every draw returns `value`. `constant(0.5)` zeroes the score jitter.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v
    }
}

/// Seeded RNG when a seed is known, entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Derive an independent per-item seed from a base seed (SplitMix64 finalizer).
///
/// Stable across platforms and toolchains, so batch outputs are golden-testable.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base ^ index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
