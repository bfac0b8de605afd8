use descend::{BatchDescentBuilder, ForwardDifferenceBuilder, StoppingRule};
use ndarray::prelude::*;

fn main() {
    let fd = ForwardDifferenceBuilder::default().step(1e-4).build().unwrap();

    // One-dimensional shifted parabola, minimized until the raw gradient
    // flattens out.
    let parabola = |x: ArrayView1<f64>| (x[0] + 10.0).powi(2);
    let minimizer = BatchDescentBuilder::default()
        .learn_rate(0.1)
        .stopping(StoppingRule::Gradient { eps: 1e-3 })
        .build()
        .unwrap();
    let res = minimizer
        .minimize(
            &parabola,
            |f, x| fd.gradient(f, x),
            Array::from_vec(vec![-5.0]).view(),
        )
        .unwrap();
    println!("parabola: {}", res);

    // Two-dimensional bowl under a hard iteration cap.
    let bowl = |x: ArrayView1<f64>| x[0].powi(2) + x[1].powi(2);
    let minimizer = BatchDescentBuilder::default()
        .learn_rate(0.5)
        .max_iter(1000)
        .build()
        .unwrap();
    let res = minimizer
        .minimize(
            &bowl,
            |f, x| fd.gradient(f, x),
            Array::from_vec(vec![5.0, 5.0]).view(),
        )
        .unwrap();
    println!("bowl: {}", res);
}
