use num_traits::Float;

// --- Forward Operation ---

/// Applies the LogSigmoid activation function element-wise.
///
/// f(x) = log(1 / (1 + exp(-x)))
///
/// The naive formula overflows for large `|x|`, so the computation is split
/// into the equivalent stable forms `-ln_1p(exp(-x))` for `x >= 0` and
/// `x - ln_1p(exp(x))` for `x < 0`. Both exponentials stay in `(0, 1]`, and
/// the output is finite for magnitudes as large as 1e300.
///
/// Every output element is `<= 0` (the log of a probability).
pub fn log_sigmoid_op<T: Float>(input: &[T]) -> Vec<T> {
    let zero = T::zero();
    input
        .iter()
        .map(|&x| {
            if x >= zero {
                -(-x).exp().ln_1p()
            } else {
                x - x.exp().ln_1p()
            }
        })
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "log_sigmoid_test.rs"]
mod tests;
