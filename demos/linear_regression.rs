use descend::{
    BatchDescentBuilder, Dataset, ForwardDifferenceBuilder, StochasticDescentBuilder, StoppingRule,
};
use ndarray::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Half mean squared error of the line `y = a + b*x` over a batch.
fn half_mse(w: ArrayView1<f64>, inputs: ArrayView1<f64>, outputs: ArrayView1<f64>) -> f64 {
    let n = inputs.len() as f64;
    inputs
        .iter()
        .zip(outputs.iter())
        .map(|(&x, &y)| {
            let r = y - w[0] - w[1] * x;
            r * r
        })
        .sum::<f64>()
        / (2.0 * n)
}

fn main() {
    let inputs = Array::linspace(-2.0, 2.0, 40);
    let outputs = inputs.mapv(|x| 2.0 + 3.0 * x);
    let data = Dataset::new(inputs, outputs).unwrap();

    let fd = ForwardDifferenceBuilder::default().build().unwrap();
    let w0 = Array::from_vec(vec![0.0, 0.0]);

    let batch = BatchDescentBuilder::default()
        .learn_rate(0.5)
        .max_iter(2000)
        .stopping(StoppingRule::Step { tol: 1e-9 })
        .build()
        .unwrap();
    let w = batch
        .minimize_on(
            half_mse,
            |f, w, x, y| fd.gradient_on(f, w, x, y),
            w0.view(),
            &data,
        )
        .unwrap();
    println!("batch fit:      {}", w);

    let sgd = StochasticDescentBuilder::default()
        .learn_rate(0.1)
        .decay_rate(0.5)
        .epochs(200)
        .batch_size(8)
        .stopping(StoppingRule::Step { tol: 1e-9 })
        .build()
        .unwrap();
    let w = sgd
        .minimize_with(
            half_mse,
            |f, w, x, y| fd.gradient_on(f, w, x, y),
            w0.view(),
            &data,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
    println!("stochastic fit: {}", w);
}
