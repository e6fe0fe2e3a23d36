// Shared helpers for the integration test suites.

/// A mixed bag of finite inputs exercised by the property tests: large and
/// small magnitudes, both signs, exact zero.
#[allow(dead_code)]
pub fn sample_inputs() -> Vec<f64> {
    vec![
        -1e6, -42.0, -3.8, -2.0, -0.5, -1e-9, 0.0, 1e-9, 0.5, 0.6, 2.0, 2.3, 4.56, 1e6,
    ]
}
