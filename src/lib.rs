//! Analytical match outcome probabilities from per-shot expected goals.
//! Each side's goal count is a Poisson binomial variable over its shots; the exact mass functions of
//! the two counts are combined into win, draw and loss probabilities without simulation.

pub mod file;
pub mod outcome;
pub mod poisson_binomial;
pub mod print;
pub mod probs;
pub mod team;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
