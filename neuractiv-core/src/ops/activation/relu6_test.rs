use super::*;
use crate::utils::testing::check_slice_near;

#[test]
fn test_relu6_integer_input() {
    let input = vec![-2_i32, 0, 2, 4, 8];
    let output = relu6_op(&input);
    assert_eq!(output, vec![0, 0, 2, 4, 6]);
}

#[test]
fn test_relu6_float_input() {
    let input = vec![-3.5, 1.2, 5.6, 7.8];
    let output = relu6_op(&input);
    check_slice_near(&output, &[0.0, 1.2, 5.6, 6.0], 1e-12);
}

#[test]
fn test_relu6_output_in_range() {
    let input: Vec<f64> = (-30..=30).map(|i| i as f64 * 0.41).collect();
    let output = relu6_op(&input);
    assert_eq!(output.len(), input.len());
    for y in output {
        assert!((0.0..=6.0).contains(&y));
    }
}

#[test]
fn test_relu6_empty_input() {
    assert!(relu6_op::<f64>(&[]).is_empty());
    assert!(relu6_op::<i64>(&[]).is_empty());
}

#[test]
fn test_relu6_nan_propagates() {
    let output = relu6_op(&[f64::NAN]);
    assert!(output[0].is_nan());
}
