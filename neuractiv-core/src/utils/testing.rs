use approx::relative_eq;

/// Checks if two float slices are approximately equal (length and data within
/// tolerance). Panics with the offending index on mismatch.
pub fn check_slice_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if !relative_eq!(*a, *e, epsilon = tolerance, max_relative = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}
