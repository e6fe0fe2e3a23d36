use crate::error::NeurActivError;
use num_traits::Float;

/// Default `alpha` used by the standard formulation of CELU.
pub const DEFAULT_ALPHA: f64 = 1.0;

// --- Forward Operation ---

/// Applies the Continuously Differentiable Exponential Linear Unit (CELU)
/// activation function element-wise.
///
/// CELU(x) = max(0, x) + min(0, alpha * (exp(x / alpha) - 1))
///
/// The transform is continuous and differentiable at zero for any non-zero
/// `alpha`. For non-positive elements the two terms collapse to the
/// exponential branch alone, which is how the loop below computes them.
///
/// # Arguments
///
/// * `input`: The input elements.
/// * `alpha`: Scale of the saturation branch ([`DEFAULT_ALPHA`] = 1.0).
///
/// # Errors
///
/// Returns [`NeurActivError::InvalidAlpha`] if `alpha` is zero, which would
/// divide by zero inside the exponential.
pub fn celu_op<T: Float>(input: &[T], alpha: T) -> Result<Vec<T>, NeurActivError> {
    if alpha == T::zero() {
        return Err(NeurActivError::InvalidAlpha {
            operation: "celu".to_string(),
            alpha: alpha.to_f64().unwrap_or(f64::NAN),
        });
    }

    let zero = T::zero();
    let one = T::one();
    let output = input
        .iter()
        .map(|&x| {
            if x > zero {
                x
            } else {
                alpha * ((x / alpha).exp() - one)
            }
        })
        .collect();
    Ok(output)
}

// --- Tests ---
#[cfg(test)]
#[path = "celu_test.rs"]
mod tests;
