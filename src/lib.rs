//! Numerical minimization of differentiable scalar objectives by
//! gradient descent, with the gradient itself estimated by forward
//! finite differences, so no analytic derivative is required.
//!
//! The crate is built from three pieces:
//!
//! - [`ForwardDifference`], which turns any objective into an estimated
//!   gradient at a point;
//! - [`BatchDescent`], full-information descent with a configurable
//!   stopping rule and an optional iteration cap;
//! - [`StochasticDescent`], mini-batch descent over a [`Dataset`] with a
//!   decayed update and per-epoch reshuffling.
//!
//! Objectives are plain closures over [`ndarray`] views. Data-free ones
//! take the parameter vector alone; data-bound ones (regression losses)
//! additionally take the input and output batch being fitted. Gradient
//! functions receive the objective along with the parameters, so any
//! estimation strategy of the same shape can replace the built-in one.
//!
//! # Examples
//!
//! ```
//! use descend::{BatchDescentBuilder, ForwardDifferenceBuilder, StoppingRule};
//! use ndarray::prelude::*;
//!
//! // Walk a shifted parabola down to its minimum at -10.
//! let objective = |x: ArrayView1<f64>| (x[0] + 10.0).powi(2);
//! let fd = ForwardDifferenceBuilder::default().step(1e-4).build().unwrap();
//! let minimizer = BatchDescentBuilder::default()
//!     .learn_rate(0.1)
//!     .stopping(StoppingRule::Gradient { eps: 1e-3 })
//!     .build()
//!     .unwrap();
//!
//! let x0 = Array::from_vec(vec![-5.0]);
//! let res = minimizer
//!     .minimize(&objective, |f, x| fd.gradient(f, x), x0.view())
//!     .unwrap();
//! assert!((res[0] + 10.0).abs() < 0.1);
//! ```

pub mod data;
pub mod descent;
pub mod error;
pub mod gradient;
pub mod stopping;

pub use crate::data::Dataset;
pub use crate::descent::{
    BatchDescent, BatchDescentBuilder, StochasticDescent, StochasticDescentBuilder,
};
pub use crate::error::{DescentError, DescentResult};
pub use crate::gradient::{ForwardDifference, ForwardDifferenceBuilder};
pub use crate::stopping::StoppingRule;
