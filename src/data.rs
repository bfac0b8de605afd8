//! Paired observations consumed by the data-driven descent drivers.

use ndarray::prelude::*;
use ndarray::s;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DescentError, DescentResult};

/// A set of paired observations, one input and one output per sample.
///
/// Both columns are immutable for the duration of a run; the invariant
/// `inputs.len() == outputs.len()` is checked once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Array1<f64>,
    outputs: Array1<f64>,
}

impl Dataset {
    /// Pairs `inputs` with `outputs` elementwise.
    pub fn new(inputs: Array1<f64>, outputs: Array1<f64>) -> DescentResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(DescentError::LengthMismatch {
                what: "dataset columns",
                got: outputs.len(),
                expected: inputs.len(),
            });
        }
        Ok(Dataset { inputs, outputs })
    }

    /// The number of observation pairs.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> ArrayView1<'_, f64> {
        self.inputs.view()
    }

    pub fn outputs(&self) -> ArrayView1<'_, f64> {
        self.outputs.view()
    }

    /// Returns a copy with one uniformly random permutation applied to
    /// both columns, so every shuffled pair originates from the same
    /// index of the original set.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Dataset {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.shuffle(rng);
        Dataset {
            inputs: indices.iter().map(|&i| self.inputs[i]).collect(),
            outputs: indices.iter().map(|&i| self.outputs[i]).collect(),
        }
    }

    /// Iterates over contiguous batches of exactly `batch_size` pairs.
    ///
    /// A trailing remainder shorter than `batch_size` is discarded, so a
    /// batch size above `len` yields no batches at all.
    pub fn batches(
        &self,
        batch_size: usize,
    ) -> impl Iterator<Item = (ArrayView1<'_, f64>, ArrayView1<'_, f64>)> {
        let count = if batch_size == 0 {
            0
        } else {
            self.len() / batch_size
        };
        (0..count).map(move |b| {
            let start = b * batch_size;
            let end = start + batch_size;
            (
                self.inputs.slice(s![start..end]),
                self.outputs.slice(s![start..end]),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Dataset {
        let inputs = Array::from_vec((0..8).map(|i| i as f64).collect());
        let outputs = inputs.mapv(|x| 2.0 * x + 1.0);
        Dataset::new(inputs, outputs).unwrap()
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let res = Dataset::new(Array1::zeros(3), Array1::zeros(4));
        assert_eq!(
            res.unwrap_err(),
            DescentError::LengthMismatch {
                what: "dataset columns",
                got: 4,
                expected: 3,
            }
        );
    }

    #[test]
    fn shuffle_preserves_pairing() {
        let data = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = data.shuffled(&mut rng);

        for k in 0..shuffled.len() {
            assert_eq!(shuffled.outputs()[k], 2.0 * shuffled.inputs()[k] + 1.0);
        }

        // a permutation, not a resampling
        let mut seen: Vec<f64> = shuffled.inputs().to_vec();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, data.inputs().to_vec());
    }

    #[test]
    fn batches_drop_the_remainder() {
        let data = sample();
        let batches: Vec<_> = data.batches(3).collect();
        assert_eq!(batches.len(), 2);
        for (inputs, outputs) in &batches {
            assert_eq!(inputs.len(), 3);
            assert_eq!(outputs.len(), 3);
        }
        assert_eq!(batches[1].0.to_vec(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn oversized_batch_yields_nothing() {
        let data = sample();
        assert_eq!(data.batches(9).count(), 0);
        assert_eq!(data.batches(0).count(), 0);
    }
}
