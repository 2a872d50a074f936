//! Scalar numeric helpers
//!
//! Standalone floating-point functions with no dependency on the
//! estimator. They operate on plain scalars and ordered sequences.

use crate::error::{Error, Result};

/// Logistic sigmoid: 1 / (1 + e^(-x)).
///
/// # Examples
///
/// ```
/// use qpath::utils::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(10.0) > 0.999);
/// assert!(sigmoid(-10.0) < 0.001);
/// ```
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the logistic sigmoid: σ(x) · (1 − σ(x)).
///
/// # Examples
///
/// ```
/// use qpath::utils::sigmoid_deriv;
///
/// // Maximal slope at the origin.
/// assert_eq!(sigmoid_deriv(0.0), 0.25);
/// assert!(sigmoid_deriv(10.0) < 0.001);
/// ```
pub fn sigmoid_deriv(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// Mean squared error between paired sequences.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when the sequences differ in length,
/// and [`Error::EmptySequence`] when both are empty (no mean to take).
///
/// # Examples
///
/// ```
/// use qpath::utils::mean_square_error;
///
/// let mse = mean_square_error(&[1.0, 2.0], &[1.0, 4.0]).unwrap();
/// assert_eq!(mse, 2.0);
/// ```
pub fn mean_square_error(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    if expected.len() != predicted.len() {
        return Err(Error::LengthMismatch {
            expected: expected.len(),
            got: predicted.len(),
        });
    }
    if expected.is_empty() {
        return Err(Error::EmptySequence);
    }

    let sum_square: f64 = expected
        .iter()
        .zip(predicted)
        .map(|(e, p)| (e - p) * (e - p))
        .sum();
    Ok(sum_square / expected.len() as f64)
}
