//! The [Poisson binomial distribution](https://en.wikipedia.org/wiki/Poisson_binomial_distribution):
//! the number of successes among independent Bernoulli trials, each with its own probability
//! of success.

use thiserror::Error;
use tracing::trace;

use crate::probs::SliceExt;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid probability {value} at index {index}")]
pub struct InvalidProbability {
    pub index: usize,
    pub value: f64,
}

/// Checks that every element of `probs` is a finite number in `[0, 1]`, reporting the first
/// offending element.
pub fn validate(probs: &[f64]) -> Result<(), InvalidProbability> {
    match probs
        .iter()
        .enumerate()
        .find(|(_, &value)| !(0.0..=1.0).contains(&value))
    {
        None => Ok(()),
        Some((index, &value)) => Err(InvalidProbability { index, value }),
    }
}

/// Computes the probability mass function of the number of successes, given the per-trial
/// success probabilities `probs`. The `k`-th element of the returned vector is the probability
/// of exactly `k` successes; the vector has `probs.len() + 1` elements.
///
/// Uses the recursive identity
/// `P(k) = 1/k * Σ_{i=1..k} (-1)^(i+1) * T(i) * P(k - i)`, where `T(i) = Σ_j (p_j / (1 - p_j))^i`
/// and `P(0) = Π_j (1 - p_j)`.
///
/// The alternating sum only stays well-conditioned while every odds ratio is at most 1. Trials
/// with `p > 0.5` are therefore recursed on their failure probabilities `1 - p` instead, giving
/// the distribution of their failure count, which is reversed into a success count and convolved
/// with that of the remaining trials. A trial with `p = 1.0` has a failure probability of zero and
/// needs no special treatment.
///
/// # Errors
/// [InvalidProbability] if any element lies outside `[0, 1]` or is not a number.
pub fn distribution(probs: &[f64]) -> Result<Vec<f64>, InvalidProbability> {
    validate(probs)?;

    let (likely, unlikely): (Vec<_>, Vec<_>) = probs.iter().copied().partition(|&p| p > 0.5);
    trace!("{} likely and {} unlikely trials", likely.len(), unlikely.len());

    let failures = likely.iter().map(|p| 1.0 - p).collect::<Vec<_>>();
    let mut likely_dist = recurse(&failures);
    likely_dist.reverse();
    Ok(convolve(&recurse(&unlikely), &likely_dist))
}

/// The recursion proper. Every element of `probs` must be strictly below 1.
fn recurse(probs: &[f64]) -> Vec<f64> {
    debug_assert!(probs.iter().all(|&p| p < 1.0), "undefined odds in {probs:?}");
    let power_sums = power_sums(probs);
    let mut pmf = vec![0.0; probs.len() + 1];
    pmf[0] = probs.iter().map(|p| 1.0 - p).product();
    for k in 1..pmf.len() {
        let mut sum = 0.0;
        for i in 1..=k {
            let term = power_sums[i] * pmf[k - i];
            if i % 2 == 1 {
                sum += term;
            } else {
                sum -= term;
            }
        }
        pmf[k] = sum / k as f64;
    }
    pmf
}

/// The distribution of the sum of two independent counts.
fn convolve(dist_a: &[f64], dist_b: &[f64]) -> Vec<f64> {
    let mut dist = vec![0.0; dist_a.len() + dist_b.len() - 1];
    for (i, &prob_a) in dist_a.iter().enumerate() {
        for (j, &prob_b) in dist_b.iter().enumerate() {
            dist[i + j] += prob_a * prob_b;
        }
    }
    dist
}

/// The expected number of successes.
#[inline]
pub fn expected_count(probs: &[f64]) -> f64 {
    probs.sum()
}

/// `T(i)` for `i` in `0..=probs.len()`: the sums of the `i`-th powers of the odds of each trial.
/// The zeroth power counts as 1 for every trial, including those with `p = 0`.
fn power_sums(probs: &[f64]) -> Vec<f64> {
    let odds = probs.iter().map(|p| p / (1.0 - p)).collect::<Vec<_>>();
    let mut sums = Vec::with_capacity(probs.len() + 1);
    sums.push(probs.len() as f64);
    for i in 1..=probs.len() {
        sums.push(odds.iter().map(|o| o.powi(i as i32)).sum());
    }
    sums
}
