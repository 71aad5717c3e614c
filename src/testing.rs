//! Testing helpers.

use assert_float_eq::*;
use tinyrand::Rand;

pub fn assert_slice_f64_absolute(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (&expected, &actual) in expected.iter().zip(actual) {
        if actual != expected {
            assert_float_absolute_eq!(expected, actual, epsilon);
        }
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (&expected, &actual) in expected.iter().zip(actual) {
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// A vector of `trials` probabilities drawn uniformly from `[0, 1]`, with roughly one in ten
/// pinned to exactly 0 or 1.
pub fn random_probs(rand: &mut impl Rand, trials: usize) -> Vec<f64> {
    (0..trials)
        .map(|_| match rand.next_lim_u64(20) {
            0 => 0.0,
            1 => 1.0,
            _ => rand.next_u64() as f64 / u64::MAX as f64,
        })
        .collect()
}
