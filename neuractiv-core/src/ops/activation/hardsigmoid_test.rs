use super::*;
use crate::utils::testing::check_slice_near;

#[test]
fn test_hardsigmoid_forward() {
    let input = vec![2.3, 0.6, -2.0, -3.8];
    let output = hardsigmoid_op(&input, 0.2, 0.5);
    check_slice_near(&output, &[0.96, 0.62, 0.1, 0.0], 1e-12);
}

#[test]
fn test_hardsigmoid_saturation() {
    let input = vec![-9.2, -0.3, 0.45, 4.56];
    let output = hardsigmoid_op(&input, 0.2, 0.5);
    check_slice_near(&output, &[0.0, 0.44, 0.59, 1.0], 1e-12);
}

#[test]
fn test_hardsigmoid_output_in_unit_interval() {
    let input: Vec<f64> = (-40..=40).map(|i| i as f64 / 4.0).collect();
    for y in hardsigmoid_op(&input, 0.2, 0.5) {
        assert!((0.0..=1.0).contains(&y), "output {} out of [0, 1]", y);
    }
}

#[test]
fn test_hardsigmoid_f32() {
    let input = vec![0.0_f32, 10.0, -10.0];
    let output = hardsigmoid_op(&input, 0.2_f32, 0.5_f32);
    assert_eq!(output, vec![0.5_f32, 1.0, 0.0]);
}

#[test]
fn test_hardsigmoid_empty_input() {
    assert!(hardsigmoid_op::<f64>(&[], 0.2, 0.5).is_empty());
}

#[test]
fn test_hardsigmoid_nan_propagates() {
    let output = hardsigmoid_op(&[f64::NAN], 0.2, 0.5);
    assert!(output[0].is_nan());
}
