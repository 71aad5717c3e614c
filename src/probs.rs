//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }
}
