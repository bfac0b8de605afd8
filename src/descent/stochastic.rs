//! Mini-batch stochastic gradient descent with a decayed update.
//!
//! Every epoch draws one random permutation, reorders both dataset
//! columns by it, and walks the result in contiguous full batches. The
//! update applied per batch is
//! `learn_rate * gradient - decay_rate * previous update`.
//!
//! Two behaviors are part of the contract and observable from outside:
//! the carried previous update is created once and survives epoch
//! boundaries, and a converged step ends only the current epoch's
//! remaining batches while later epochs still run.
//!
//! # Examples
//!
//! ```
//! use descend::{Dataset, ForwardDifferenceBuilder, StochasticDescentBuilder};
//! use ndarray::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let inputs = Array::linspace(-1.0, 1.0, 16);
//! let outputs = inputs.mapv(|x| 1.0 + 2.0 * x);
//! let data = Dataset::new(inputs, outputs).unwrap();
//!
//! // half mean squared error of y = a + b*x
//! let loss = |w: ArrayView1<f64>, x: ArrayView1<f64>, y: ArrayView1<f64>| {
//!     let n = x.len() as f64;
//!     x.iter()
//!         .zip(y.iter())
//!         .map(|(&xi, &yi)| (yi - w[0] - w[1] * xi).powi(2))
//!         .sum::<f64>()
//!         / (2.0 * n)
//! };
//!
//! let fd = ForwardDifferenceBuilder::default().build().unwrap();
//! let sgd = StochasticDescentBuilder::default()
//!     .learn_rate(0.1)
//!     .epochs(100)
//!     .batch_size(4)
//!     .build()
//!     .unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let w = sgd
//!     .minimize_with(
//!         loss,
//!         |f, w, x, y| fd.gradient_on(f, w, x, y),
//!         Array::from_vec(vec![0.0, 0.0]).view(),
//!         &data,
//!         &mut rng,
//!     )
//!     .unwrap();
//! assert!((w[0] - 1.0).abs() < 0.1);
//! assert!((w[1] - 2.0).abs() < 0.1);
//! ```

use derive_builder::Builder;
use ndarray::prelude::*;
use rand::Rng;

use crate::data::Dataset;
use crate::error::{DescentError, DescentResult};
use crate::stopping::StoppingRule;

/// Mini-batch gradient descent over a [`Dataset`].
#[derive(Builder, Debug, Clone)]
pub struct StochasticDescent {
    /// Fraction of the batch gradient applied at each update. Must be
    /// positive.
    #[builder(default = "0.01")]
    pub learn_rate: f64,

    /// Fraction of the previous update folded into the next one. Must
    /// lie in `[0, 1)`; `0` disables the decay term entirely.
    #[builder(default = "0.0")]
    pub decay_rate: f64,

    /// The number of passes over the dataset. `0` returns the starting
    /// point untouched.
    #[builder(default = "1")]
    pub epochs: usize,

    /// Observation pairs per gradient estimate. A trailing remainder
    /// shorter than this is discarded each epoch, and a batch size above
    /// the dataset length makes the whole epoch a no-op.
    #[builder(default = "1")]
    pub batch_size: usize,

    /// Convergence test applied to every proposed update.
    #[builder(default = "StoppingRule::Step { tol: 1e-6 }")]
    pub stopping: StoppingRule,
}

impl StochasticDescent {
    /// Minimizes a data-bound objective with shuffles drawn from
    /// [`rand::thread_rng`].
    pub fn minimize<F, G>(
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
        self.minimize_with(func, grad, x0, data, &mut rand::thread_rng())
    }

    /// Same as [`minimize`](Self::minimize), with a caller-supplied
    /// randomness source so the per-epoch permutations can be made
    /// deterministic.
    pub fn minimize_with<F, G, R>(
        &self,
        func: F,
        grad: G,
        x0: ArrayView1<f64>,
        data: &Dataset,
        rng: &mut R,
    ) -> DescentResult<Array1<f64>>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>, ArrayView1<f64>) -> f64,
        G: Fn(&F, ArrayView1<f64>, ArrayView1<f64>, ArrayView1<f64>) -> DescentResult<Array1<f64>>,
        R: Rng,
    {
        self.validate()?;
        let mut x = x0.to_owned();
        // carried across epoch boundaries, not reset per epoch
        let mut previous = Array1::<f64>::zeros(x.len());
        let mut iteration = 0;
        for _ in 0..self.epochs {
            let shuffled = data.shuffled(rng);
            for (inputs, outputs) in shuffled.batches(self.batch_size) {
                let g = grad(&func, x.view(), inputs, outputs)?;
                if g.len() != x.len() {
                    return Err(DescentError::LengthMismatch {
                        what: "gradient",
                        got: g.len(),
                        expected: x.len(),
                    });
                }
                let difference = &g * self.learn_rate - &previous * self.decay_rate;
                if difference.iter().any(|d| !d.is_finite()) {
                    return Err(DescentError::Divergence {
                        what: "update step",
                        iteration,
                    });
                }
                // a hit ends this epoch's pass only; later epochs still run
                if self.stopping.converged(g.view(), difference.view()) {
                    break;
                }
                x -= &difference;
                previous = difference;
                iteration += 1;
            }
        }
        Ok(x)
    }

    fn validate(&self) -> DescentResult<()> {
        if self.learn_rate <= 0.0 || !self.learn_rate.is_finite() {
            return Err(DescentError::InvalidParameter {
                parameter: "learn_rate",
                message: "must be positive and finite",
            });
        }
        if !(0.0..1.0).contains(&self.decay_rate) {
            return Err(DescentError::InvalidParameter {
                parameter: "decay_rate",
                message: "must lie in [0, 1)",
            });
        }
        if self.batch_size == 0 {
            return Err(DescentError::InvalidParameter {
                parameter: "batch_size",
                message: "must be at least 1",
            });
        }
        self.stopping.validate()
    }
}
