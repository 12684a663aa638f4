//! Numeric kernels over flat row-major buffers. `Matrix` is built on these.
mod mtx_mul;

pub use self::mtx_mul::*;
use num_traits::{Num, Zero};
use std::cmp::Ordering;

/// The max, comparison and exp operations the kernels need from an element type.
pub trait GenericOps {
    /// Returns the higher value of the two.
    fn generic_max(self, other: &Self) -> Self;
    fn generic_partial_cmp(&self, other: &Self) -> Option<Ordering>;
    fn generic_exp(self) -> f32;
}

/// Convert negative values in source to zero
pub fn relu<T>(source: &[T]) -> Vec<T>
where
    T: Zero + GenericOps + Copy,
{
    source.iter().map(|&x| x.generic_max(&T::zero())).collect()
}

/// Normalizes the exponents of `input` into a probability distribution.
///
/// The exponents are taken relative to the largest element, which leaves the result unchanged
/// while keeping `exp` from overflowing on large inputs.
pub fn softmax<T>(input: &[T]) -> Vec<f32>
where
    T: GenericOps + Num + Copy,
{
    let max = match input.first() {
        Some(&first) => input.iter().fold(first, |acc, x| acc.generic_max(x)),
        None => return Vec::new(),
    };
    let exps = input
        .iter()
        .map(|&val| (val - max).generic_exp())
        .collect::<Vec<f32>>();
    let c = 1f32 / exps.iter().sum::<f32>();
    exps.into_iter().map(|e| e * c).collect()
}

/// Returns the index of the first occurrence of the largest element, or 0 for an empty slice.
pub fn argmax<T>(source: &[T]) -> usize
where
    T: GenericOps,
{
    let mut idx = 0;
    for (i, x) in source.iter().enumerate().skip(1) {
        if x.generic_partial_cmp(&source[idx]) == Some(Ordering::Greater) {
            idx = i;
        }
    }
    idx
}

impl GenericOps for f32 {
    fn generic_max(self, other: &f32) -> f32 {
        self.max(*other)
    }
    fn generic_partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }
    fn generic_exp(self) -> f32 {
        self.exp()
    }
}
