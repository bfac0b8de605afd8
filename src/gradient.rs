//! Forward finite-difference estimation of objective gradients.

use derive_builder::Builder;
use ndarray::prelude::*;

use crate::error::{DescentError, DescentResult};

/// Estimates the partial derivatives of an objective by forward
/// differences.
///
/// For each parameter the objective is re-evaluated with that component
/// incremented by `step` and compared against the shared unperturbed
/// value, for a total of `n + 1` objective evaluations per gradient.
#[derive(Builder, Debug, Clone, Copy)]
pub struct ForwardDifference {
    /// Increment added to one parameter at a time to form the difference
    /// quotient. Must be nonzero; smaller values are more accurate until
    /// floating-point cancellation takes over.
    #[builder(default = "1e-6")]
    pub step: f64,
}

impl ForwardDifference {
    /// Gradient of a data-free objective at `x`.
    ///
    /// An empty `x` yields an empty gradient. A non-finite perturbed
    /// evaluation is carried into the corresponding component unchanged.
    pub fn gradient<F>(&self, func: &F, x: ArrayView1<f64>) -> DescentResult<Array1<f64>>
    where
        F: Fn(ArrayView1<f64>) -> f64 + ?Sized,
    {
        self.check_step()?;
        let f0 = func(x);
        if !f0.is_finite() {
            return Err(DescentError::ObjectiveFailed { value: f0 });
        }
        let mut xk = x.to_owned();
        let mut grad = Array1::<f64>::zeros(x.len());
        for k in 0..x.len() {
            let saved = xk[k];
            xk[k] = saved + self.step;
            grad[k] = (func(xk.view()) - f0) / self.step;
            xk[k] = saved;
        }
        Ok(grad)
    }

    /// Gradient of a data-bound objective at `x`; the same `inputs` and
    /// `outputs` batch is passed to every evaluation.
    pub fn gradient_on<F>(
        &self,
        func: &F,
        x: ArrayView1<f64>,
        inputs: ArrayView1<f64>,
        outputs: ArrayView1<f64>,
    ) -> DescentResult<Array1<f64>>
    where
        F: Fn(ArrayView1<f64>, ArrayView1<f64>, ArrayView1<f64>) -> f64 + ?Sized,
    {
        self.gradient(&|x: ArrayView1<f64>| func(x, inputs, outputs), x)
    }

    fn check_step(&self) -> DescentResult<()> {
        if self.step == 0.0 || !self.step.is_finite() {
            return Err(DescentError::InvalidParameter {
                parameter: "step",
                message: "finite-difference increment must be nonzero and finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn gradient() {
        let function = |x: ArrayView1<f64>| 1.0 * x[0].powi(2) + 200. * x[1].powi(2);
        let x = Array::from_vec(vec![1.0, 1.0]);
        let fd = ForwardDifferenceBuilder::default().build().unwrap();
        let res = fd.gradient(&function, x.view()).unwrap();

        println!("Res: {}", res);
        assert!(approx_eq!(f64, res[0], 2.0, epsilon = 1e-4));
        assert!(approx_eq!(f64, res[1], 400.0, epsilon = 1e-3));
    }

    #[test]
    fn doubles_the_coordinate_on_a_square() {
        let square = |x: ArrayView1<f64>| x[0].powi(2);
        let fd = ForwardDifferenceBuilder::default().build().unwrap();

        let res = fd.gradient(&square, Array::from_vec(vec![3.0]).view()).unwrap();
        assert!((res[0] - 6.0).abs() <= 1e-3);

        let res = fd.gradient(&square, Array::from_vec(vec![-4.0]).view()).unwrap();
        assert!((res[0] + 8.0).abs() <= 1e-3);
    }

    #[test]
    fn empty_parameters_give_an_empty_gradient() {
        let fd = ForwardDifferenceBuilder::default().build().unwrap();
        let res = fd.gradient(&|_: ArrayView1<f64>| 0.0, Array1::zeros(0).view()).unwrap();
        assert_eq!(res.len(), 0);
    }

    #[test]
    fn zero_step_is_rejected() {
        let fd = ForwardDifferenceBuilder::default().step(0.0).build().unwrap();
        let res = fd.gradient(&|x: ArrayView1<f64>| x[0], Array::from_vec(vec![1.0]).view());
        assert!(matches!(
            res,
            Err(DescentError::InvalidParameter { parameter: "step", .. })
        ));
    }

    #[test]
    fn non_finite_base_value_fails() {
        let fd = ForwardDifferenceBuilder::default().build().unwrap();
        let res = fd.gradient(&|x: ArrayView1<f64>| x[0].ln(), Array::from_vec(vec![0.0]).view());
        assert!(matches!(res, Err(DescentError::ObjectiveFailed { .. })));
    }

    #[test]
    fn non_finite_perturbation_lands_in_the_component() {
        // finite at the base point, NaN one step to the right
        let edge = |x: ArrayView1<f64>| (1.0 - x[0]).sqrt();
        let fd = ForwardDifferenceBuilder::default().build().unwrap();
        let res = fd.gradient(&edge, Array::from_vec(vec![1.0]).view()).unwrap();
        assert!(res[0].is_nan());
    }

    #[test]
    fn data_bound_gradient_matches_the_analytic_one() {
        // half mean squared error of y = a + b*x
        let loss = |w: ArrayView1<f64>, x: ArrayView1<f64>, y: ArrayView1<f64>| {
            let n = x.len() as f64;
            x.iter()
                .zip(y.iter())
                .map(|(&xi, &yi)| {
                    let r = yi - w[0] - w[1] * xi;
                    r * r
                })
                .sum::<f64>()
                / (2.0 * n)
        };
        let inputs = Array::from_vec(vec![0.0, 1.0, 2.0]);
        let outputs = Array::from_vec(vec![1.0, 3.0, 5.0]);
        let w = Array::from_vec(vec![0.0, 0.0]);

        let fd = ForwardDifferenceBuilder::default().build().unwrap();
        let res = fd
            .gradient_on(&loss, w.view(), inputs.view(), outputs.view())
            .unwrap();

        // d/da = -mean(y), d/db = -mean(x*y) at (0, 0)
        assert!(approx_eq!(f64, res[0], -3.0, epsilon = 1e-3));
        assert!(approx_eq!(f64, res[1], -13.0 / 3.0, epsilon = 1e-3));
    }
}
