use crate::error::NeurActivError;
use num_traits::Float;

/// Default shrinkage threshold.
pub const DEFAULT_LAMBD: f64 = 0.5;

// --- Forward Operation ---

/// Applies the Softshrink activation function element-wise.
///
/// f(x) = x - lambd if x > lambd,
///        x + lambd if x < -lambd,
///        0 otherwise
///
/// The boundary is inclusive: `|x| == lambd` falls into the dead zone and
/// maps to 0, as does a NaN element (it fails both comparisons, matching the
/// reference implementation).
///
/// # Arguments
///
/// * `input`: The input elements.
/// * `lambd`: Shrinkage threshold ([`DEFAULT_LAMBD`] = 0.5).
///
/// # Errors
///
/// Returns [`NeurActivError::InvalidLambda`] if `lambd` is negative or NaN.
pub fn softshrink_op<T: Float>(input: &[T], lambd: T) -> Result<Vec<T>, NeurActivError> {
    if !(lambd >= T::zero()) {
        return Err(NeurActivError::InvalidLambda {
            lambd: lambd.to_f64().unwrap_or(f64::NAN),
        });
    }

    let zero = T::zero();
    let output = input
        .iter()
        .map(|&x| {
            if x > lambd {
                x - lambd
            } else if x < -lambd {
                x + lambd
            } else {
                zero
            }
        })
        .collect();
    Ok(output)
}

// --- Tests ---
#[cfg(test)]
#[path = "softshrink_test.rs"]
mod tests;
