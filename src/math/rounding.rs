//! Rounding and averaging primitives.
//!
//! Scores and generated features round half *up* (toward +∞), so `-2.5 → -2`
//! and `2.5 → 3`. `f64::round` rounds half away from zero, which differs for
//! negative ties; everything in this crate goes through `round_half_up`.

/// Round to the nearest integer, ties toward +∞.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to `decimals` places using `round_half_up`.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    round_half_up(x * scale) / scale
}

/// Arithmetic mean; `None` for an empty iterator.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(688.49), 688.0);
    }

    #[test]
    fn round_to_two_places() {
        assert!((round_to(3.14159, 2) - 3.14).abs() < 1e-12);
        assert!((round_to(2999.999, 2) - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(mean([1.0, 2.0, 3.0]), Some(2.0));
    }
}
