use super::*;
use crate::utils::testing::check_slice_near;

#[test]
fn test_prelu_forward() {
    let input = vec![2.3, 0.6, -2.0, -3.8];
    let output = prelu_op(&input, 0.3);
    check_slice_near(&output, &[2.3, 0.6, -0.6, -1.14], 1e-12);
}

#[test]
fn test_prelu_small_alpha() {
    let input = vec![-9.2, -0.3, 0.45];
    let output = prelu_op(&input, 0.067);
    check_slice_near(&output, &[-0.6164, -0.0201, 0.45], 1e-12);
}

#[test]
fn test_prelu_positive_passthrough() {
    let input = vec![0.001, 1.0, 42.0, 1e12];
    let output = prelu_op(&input, 0.3);
    assert_eq!(output, input);
}

#[test]
fn test_prelu_zero_alpha_is_relu() {
    let output = prelu_op(&[-5.0, 0.0, 5.0], 0.0);
    assert_eq!(output, vec![-0.0, 0.0, 5.0]);
}

#[test]
fn test_prelu_empty_input() {
    assert!(prelu_op::<f64>(&[], 0.3).is_empty());
}
