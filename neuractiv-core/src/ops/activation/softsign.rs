use num_traits::Float;

// --- Forward Operation ---

/// Applies the Softsign activation function element-wise.
///
/// f(x) = x / (1 + |x|)
///
/// Always finite for finite input and bounded in `(-1, 1)`; zero maps to
/// zero.
pub fn softsign_op<T: Float>(input: &[T]) -> Vec<T> {
    let one = T::one();
    input.iter().map(|&x| x / (one + x.abs())).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "softsign_test.rs"]
mod tests;
