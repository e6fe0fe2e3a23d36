use super::clip;
use num_traits::Float;

/// Default scale factor.
pub const DEFAULT_ALPHA: f64 = 0.2;
/// Default offset factor.
pub const DEFAULT_BETA: f64 = 0.5;

// --- Forward Operation ---

/// Applies the Hardsigmoid activation function element-wise.
///
/// f(x) = clip(alpha * x + beta, 0, 1)
///
/// A piecewise-linear approximation of the logistic sigmoid. Every output
/// element lies in `[0, 1]`; NaN input elements pass through as NaN.
///
/// # Arguments
///
/// * `input`: The input elements.
/// * `alpha`: Scale factor ([`DEFAULT_ALPHA`] = 0.2).
/// * `beta`: Offset factor ([`DEFAULT_BETA`] = 0.5).
pub fn hardsigmoid_op<T: Float>(input: &[T], alpha: T, beta: T) -> Vec<T> {
    let zero = T::zero();
    let one = T::one();
    input
        .iter()
        .map(|&x| clip(alpha * x + beta, zero, one))
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "hardsigmoid_test.rs"]
mod tests;
