use crate::error::NeurActivError;
use num_traits::Float;
use rand::Rng;
use rand_distr::uniform::SampleUniform;
use rand_distr::{Distribution, Uniform};
use std::fmt::Debug;

/// Default lower bound of the slope distribution.
pub const DEFAULT_LOWER: f64 = 0.125;
/// Default upper bound of the slope distribution.
pub const DEFAULT_UPPER: f64 = 0.333;

// --- Forward Operation ---

/// Applies the Randomized Leaky Rectified Linear Unit (RReLU) activation
/// function element-wise, drawing slopes from the supplied generator.
///
/// f(x) = x if x > 0, alpha_i * x otherwise, alpha_i ~ Uniform(lower, upper)
///
/// One slope is drawn per element, per call, i.i.d.; the generator is a
/// parameter so tests can seed a deterministic one.
///
/// # Arguments
///
/// * `input`: The input elements.
/// * `lower`: Lower bound of the slope distribution ([`DEFAULT_LOWER`] = 0.125).
/// * `upper`: Upper bound of the slope distribution ([`DEFAULT_UPPER`] = 0.333).
/// * `rng`: Source of the uniform draws.
///
/// # Errors
///
/// Returns [`NeurActivError::InvalidInterval`] if `lower > upper`. The guard
/// is NaN-aware, so a NaN bound is rejected instead of reaching the
/// distribution constructor.
pub fn rrelu_with_rng<T, R>(
    input: &[T],
    lower: T,
    upper: T,
    rng: &mut R,
) -> Result<Vec<T>, NeurActivError>
where
    T: Float + SampleUniform + Debug,
    R: Rng + ?Sized,
{
    if !(lower <= upper) {
        return Err(NeurActivError::InvalidInterval {
            operation: "rrelu".to_string(),
            lower: lower.to_f64().unwrap_or(f64::NAN),
            upper: upper.to_f64().unwrap_or(f64::NAN),
        });
    }
    if lower == upper {
        log::debug!(
            "rrelu: degenerate sampling interval [{:?}, {:?}], every slope equals lower",
            lower,
            upper
        );
    }

    let zero = T::zero();
    let slope = Uniform::new_inclusive(lower, upper);
    let output = input
        .iter()
        .map(|&x| {
            // One draw per element, pass-through branch included, so the
            // stream position depends only on the element count.
            let alpha = slope.sample(rng);
            if x > zero {
                x
            } else {
                alpha * x
            }
        })
        .collect();
    Ok(output)
}

/// [`rrelu_with_rng`] with the thread-local generator, for callers that do
/// not care about reproducibility.
pub fn rrelu_op<T>(input: &[T], lower: T, upper: T) -> Result<Vec<T>, NeurActivError>
where
    T: Float + SampleUniform + Debug,
{
    rrelu_with_rng(input, lower, upper, &mut rand::thread_rng())
}

// --- Tests ---
#[cfg(test)]
#[path = "rrelu_test.rs"]
mod tests;
