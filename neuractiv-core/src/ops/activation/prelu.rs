use num_traits::Float;

// --- Forward Operation ---

/// Applies the Parametric Rectified Linear Unit (PReLU) activation function
/// element-wise.
///
/// f(x) = x if x > 0, alpha * x otherwise
///
/// `alpha` is a learned parameter in real use; here it is supplied explicitly
/// by the caller and has no default.
pub fn prelu_op<T: Float>(input: &[T], alpha: T) -> Vec<T> {
    let zero = T::zero();
    input
        .iter()
        .map(|&x| if x > zero { x } else { alpha * x })
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "prelu_test.rs"]
mod tests;
