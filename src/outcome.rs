//! Head-to-head outcome of two independent Poisson binomial counts, such as the goals scored by
//! each side of a match.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::poisson_binomial;
use crate::poisson_binomial::InvalidProbability;

const POINTS_FOR_WIN: f64 = 3.0;
const POINTS_FOR_DRAW: f64 = 1.0;

/// Probabilities of `A > B`, `A = B` and `A < B` for two counts `A` and `B`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub greater: f64,
    pub equal: f64,
    pub less: f64,
}
impl OutcomeDistribution {
    /// The same distribution seen from the side of `B`.
    pub fn reverse(self) -> Self {
        Self {
            greater: self.less,
            equal: self.equal,
            less: self.greater,
        }
    }

    pub fn sum(&self) -> f64 {
        self.greater + self.equal + self.less
    }

    /// Expected league points for `A`: three for a win, one for a draw.
    pub fn expected_points(&self) -> f64 {
        POINTS_FOR_WIN * self.greater + POINTS_FOR_DRAW * self.equal
    }

    /// Expected league points for `B`.
    pub fn expected_points_against(&self) -> f64 {
        self.reverse().expected_points()
    }
}

/// Given the per-trial success probabilities of two independent Poisson binomial variables
/// `A` and `B`, computes the probabilities of `A > B`, `A = B` and `A < B`.
///
/// # Errors
/// [InvalidProbability] if either `a` or `b` contains an element outside `[0, 1]`. `a` is
/// checked before `b`.
pub fn outcome_distribution(a: &[f64], b: &[f64]) -> Result<OutcomeDistribution, InvalidProbability> {
    poisson_binomial::validate(a)?;
    poisson_binomial::validate(b)?;

    // the summation below requires that B has at least as many trials as A
    if a.len() > b.len() {
        trace!("swapping A ({}) and B ({})", a.len(), b.len());
        return Ok(outcome_distribution(b, a)?.reverse());
    }

    let dist_a = poisson_binomial::distribution(a)?;
    let dist_b = poisson_binomial::distribution(b)?;
    Ok(combine(&dist_a, &dist_b))
}

/// As [outcome_distribution], for counts whose mass functions `dist_a` and `dist_b` are
/// already known.
pub fn compare(dist_a: &[f64], dist_b: &[f64]) -> OutcomeDistribution {
    if dist_a.len() > dist_b.len() {
        compare(dist_b, dist_a).reverse()
    } else {
        combine(dist_a, dist_b)
    }
}

fn combine(dist_a: &[f64], dist_b: &[f64]) -> OutcomeDistribution {
    debug_assert!(
        dist_a.len() <= dist_b.len(),
        "A ({}) must not be longer than B ({})",
        dist_a.len(),
        dist_b.len()
    );
    let (mut greater, mut equal, mut less) = (0.0, 0.0, 0.0);
    for (i, &prob_a) in dist_a.iter().enumerate() {
        equal += prob_a * dist_b[i];
        for &prob_b in &dist_b[..i] {
            greater += prob_a * prob_b;
        }
        for &prob_b in &dist_b[i + 1..] {
            less += prob_a * prob_b;
        }
    }
    OutcomeDistribution {
        greater,
        equal,
        less,
    }
}
