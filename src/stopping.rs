//! Convergence rules for descent loops.

use ndarray::prelude::*;

use crate::error::{DescentError, DescentResult};

/// Decides when a descent run has converged.
///
/// Exactly one rule is active per run; which one is a configuration
/// choice of the driver, never a hybrid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoppingRule {
    /// Halt once every raw partial derivative is at most `eps` in
    /// magnitude, before the learning rate is applied.
    Gradient { eps: f64 },

    /// Halt once every component of the proposed scaled update is at
    /// most `tol` in magnitude.
    Step { tol: f64 },
}

impl StoppingRule {
    /// Tests the rule against the raw gradient and the proposed update.
    pub fn converged(&self, gradient: ArrayView1<f64>, step: ArrayView1<f64>) -> bool {
        match *self {
            StoppingRule::Gradient { eps } => within(gradient, eps),
            StoppingRule::Step { tol } => within(step, tol),
        }
    }

    pub(crate) fn validate(&self) -> DescentResult<()> {
        let threshold = match *self {
            StoppingRule::Gradient { eps } => eps,
            StoppingRule::Step { tol } => tol,
        };
        if threshold <= 0.0 || !threshold.is_finite() {
            return Err(DescentError::InvalidParameter {
                parameter: "stopping threshold",
                message: "must be positive and finite",
            });
        }
        Ok(())
    }
}

// NaN components compare false, so a poisoned vector never satisfies a
// rule.
fn within(v: ArrayView1<f64>, bound: f64) -> bool {
    v.iter().all(|x| x.abs() <= bound)
}
