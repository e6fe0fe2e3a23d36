use super::clip;
use crate::error::NeurActivError;
use num_traits::Float;

/// Default lower clipping bound.
pub const DEFAULT_MIN_VAL: f64 = -1.0;
/// Default upper clipping bound.
pub const DEFAULT_MAX_VAL: f64 = 1.0;

// --- Forward Operation ---

/// Applies the HardTanh (hard hyperbolic tangent) activation function
/// element-wise.
///
/// f(x) = clip(x, min_val, max_val)
///
/// # Arguments
///
/// * `input`: The input elements.
/// * `min_val`: Lower bound of the range ([`DEFAULT_MIN_VAL`] = -1.0).
/// * `max_val`: Upper bound of the range ([`DEFAULT_MAX_VAL`] = 1.0).
///
/// # Errors
///
/// Returns [`NeurActivError::InvalidRange`] for an inverted range. The guard
/// is written NaN-aware, so a NaN bound is rejected here instead of producing
/// a degenerate clip.
pub fn hard_tanh_op<T: Float>(
    input: &[T],
    min_val: T,
    max_val: T,
) -> Result<Vec<T>, NeurActivError> {
    if !(min_val <= max_val) {
        log::debug!("hard_tanh: rejecting inverted clipping range");
        return Err(NeurActivError::InvalidRange {
            operation: "hard_tanh".to_string(),
            min_val: min_val.to_f64().unwrap_or(f64::NAN),
            max_val: max_val.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(input.iter().map(|&x| clip(x, min_val, max_val)).collect())
}

// --- Tests ---
#[cfg(test)]
#[path = "hard_tanh_test.rs"]
mod tests;
