//! Full-information gradient descent.
//!
//! # Examples
//!
//! ```
//! use descend::{BatchDescentBuilder, ForwardDifferenceBuilder};
//! use ndarray::prelude::*;
//!
//! let objective = |x: ArrayView1<f64>| x[0].powi(2) + x[1].powi(2);
//! let fd = ForwardDifferenceBuilder::default().build().unwrap();
//! let minimizer = BatchDescentBuilder::default()
//!     .learn_rate(0.5)
//!     .max_iter(1000)
//!     .build()
//!     .unwrap();
//! let x0 = Array::from_vec(vec![5.0, 5.0]);
//! let res = minimizer
//!     .minimize(&objective, |f, x| fd.gradient(f, x), x0.view())
//!     .unwrap();
//! println!("res: {}", res);
//! ```

use derive_builder::Builder;
use ndarray::prelude::*;

use crate::data::Dataset;
use crate::error::{DescentError, DescentResult};
use crate::stopping::StoppingRule;

/// Gradient descent over full-information gradients.
///
/// Both historical stopping set-ups are plain configurations of the same
/// loop: a raw-gradient rule with no iteration cap (run until converged),
/// or a scaled-step rule under a hard cap (always terminates, converging
/// early when the rule is met).
#[derive(Builder, Debug, Clone)]
pub struct BatchDescent {
    /// Fraction of the gradient applied at each update. Must be positive.
    #[builder(default = "0.01")]
    pub learn_rate: f64,

    /// The maximum number of updates. `None` loops until the stopping
    /// rule is satisfied; `Some(0)` returns the starting point untouched.
    #[builder(default = "None")]
    #[builder(setter(into))]
    pub max_iter: Option<usize>,

    /// Convergence test applied to every proposed update.
    #[builder(default = "StoppingRule::Step { tol: 1e-6 }")]
    pub stopping: StoppingRule,
}

impl BatchDescent {
    /// Minimizes a data-free objective starting from `x0`.
    ///
    /// `grad` receives the objective and the current parameters, so any
    /// gradient strategy of that shape can stand in for
    /// [`ForwardDifference`](crate::gradient::ForwardDifference).
    pub fn minimize<F, G>(
        &self,
        func: F,
        grad: G,
        x0: ArrayView1<f64>,
    ) -> DescentResult<Array1<f64>>
    where
        F: Fn(ArrayView1<f64>) -> f64,
        G: Fn(&F, ArrayView1<f64>) -> DescentResult<Array1<f64>>,
    {
        self.validate()?;
        let mut x = x0.to_owned();
        let mut iteration = 0;
        while self.max_iter.map_or(true, |cap| iteration < cap) {
            let g = grad(&func, x.view())?;
            if g.len() != x.len() {
                return Err(DescentError::LengthMismatch {
                    what: "gradient",
                    got: g.len(),
                    expected: x.len(),
                });
            }
            let step = &g * self.learn_rate;
            if step.iter().any(|s| !s.is_finite()) {
                return Err(DescentError::Divergence {
                    what: "update step",
                    iteration,
                });
            }
            if self.stopping.converged(g.view(), step.view()) {
                break;
            }
            x -= &step;
            iteration += 1;
        }
        Ok(x)
    }

    /// Minimizes a data-bound objective; the whole dataset is the batch.
    pub fn minimize_on<F, G>(
        &self,
        func: F,
        grad: G,
        x0: ArrayView1<f64>,
        data: &Dataset,
    ) -> DescentResult<Array1<f64>>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>, ArrayView1<f64>) -> f64,
        G: Fn(&F, ArrayView1<f64>, ArrayView1<f64>, ArrayView1<f64>) -> DescentResult<Array1<f64>>,
    {
        let bound = |x: ArrayView1<f64>| func(x, data.inputs(), data.outputs());
        self.minimize(
            bound,
            |_bound, x| grad(&func, x, data.inputs(), data.outputs()),
            x0,
        )
    }

    fn validate(&self) -> DescentResult<()> {
        if self.learn_rate <= 0.0 || !self.learn_rate.is_finite() {
            return Err(DescentError::InvalidParameter {
                parameter: "learn_rate",
                message: "must be positive and finite",
            });
        }
        self.stopping.validate()
    }
}
