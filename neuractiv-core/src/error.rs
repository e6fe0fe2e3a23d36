use thiserror::Error;

/// Custom error type for the NeurActiv catalogue.
///
/// Every variant describes a malformed parameter combination and is raised
/// before any element of the input is touched. Parameter values are recorded
/// as `f64` for display.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeurActivError {
    #[error("Invalid alpha for operation {operation}: expected a non-zero value, got {alpha}")]
    InvalidAlpha { operation: String, alpha: f64 },

    #[error("Invalid clipping range for operation {operation}: min_val {min_val} is greater than max_val {max_val}")]
    InvalidRange {
        operation: String,
        min_val: f64,
        max_val: f64,
    },

    #[error("Invalid lambda for softshrink: expected lambd >= 0, got {lambd}")]
    InvalidLambda { lambd: f64 },

    #[error("Invalid sampling interval for operation {operation}: lower {lower} is greater than upper {upper}")]
    InvalidInterval {
        operation: String,
        lower: f64,
        upper: f64,
    },
}
