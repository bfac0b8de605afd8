//! Error types shared by the gradient estimator and the descent drivers.

use thiserror::Error;

/// Result type for descent operations.
pub type DescentResult<T> = Result<T, DescentError>;

/// Errors produced while configuring or running a descent.
///
/// Every error surfaces synchronously to the caller; the drivers never
/// retry or continue past a failed evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescentError {
    /// A hyperparameter failed validation before the first iteration.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: &'static str,
    },

    /// Two sequences that must be paired elementwise differ in length.
    #[error("length mismatch for {what}: got {got}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// A gradient or update step stopped being finite.
    #[error("non-finite {what} at iteration {iteration}")]
    Divergence {
        what: &'static str,
        iteration: usize,
    },

    /// The objective produced a non-finite value at the current parameters.
    #[error("objective evaluated to {value} at the current parameters")]
    ObjectiveFailed { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = DescentError::InvalidParameter {
            parameter: "learn_rate",
            message: "must be positive and finite",
        };
        assert!(err.to_string().contains("learn_rate"));

        let err = DescentError::LengthMismatch {
            what: "gradient",
            got: 3,
            expected: 2,
        };
        assert!(err.to_string().contains("got 3, expected 2"));

        let err = DescentError::Divergence {
            what: "update step",
            iteration: 7,
        };
        assert!(err.to_string().contains("iteration 7"));

        let err = DescentError::ObjectiveFailed { value: f64::NAN };
        assert!(err.to_string().contains("NaN"));
    }
}
