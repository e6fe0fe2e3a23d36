use super::{clip, scalar};
use num_traits::{Num, NumCast};

// --- Forward Operation ---

/// Applies the Rectified Linear Unit 6 (ReLU6) activation function
/// element-wise.
///
/// f(x) = clip(x, 0, 6)
///
/// The bound is deliberately wider than [`num_traits::Float`] so integer
/// element types keep their type through the transform: `i32` in, `i32` out.
pub fn relu6_op<T>(input: &[T]) -> Vec<T>
where
    T: Num + NumCast + PartialOrd + Copy,
{
    let zero = T::zero();
    let six = scalar::<T>(6);
    input.iter().map(|&x| clip(x, zero, six)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "relu6_test.rs"]
mod tests;
