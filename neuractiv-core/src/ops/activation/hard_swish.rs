use super::{clip, scalar};
use num_traits::Float;

// --- Forward Operation ---

/// Applies the Hardswish activation function element-wise.
///
/// f(x) = x * clip(x + 3, 0, 6) / 6
///
/// The gate factor is a hard-sigmoid of the input, so the function is the
/// identity above `x = 3` and zero below `x = -3`. Note that negative inputs
/// in the dead zone produce `-0.0`.
pub fn hard_swish_op<T: Float>(input: &[T]) -> Vec<T> {
    let zero = T::zero();
    let three = scalar::<T>(3);
    let six = scalar::<T>(6);
    input
        .iter()
        .map(|&x| x * clip(x + three, zero, six) / six)
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "hard_swish_test.rs"]
mod tests;
