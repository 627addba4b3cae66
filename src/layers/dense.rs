use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::{sigmoid, SigmoidGradient};
use crate::error::{check_len, Result};
use crate::math::matrix::Matrix;

/// Fully connected sigmoid layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Shape `(size, input_size)`.
    pub weights: Matrix,
    pub biases: Vec<f64>,
    /// Activations from the most recent `feed_from`; never persisted.
    #[serde(skip)]
    neurons: Vec<f64>,
}

impl Layer {
    /// Weights and biases drawn uniformly from [-1, 1].
    pub fn new<R: Rng>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let weights = Matrix::random(size, input_size, rng);
        let biases = (0..size).map(|_| rng.gen_range(-1.0..=1.0)).collect();

        Layer {
            weights,
            biases,
            neurons: vec![0.0; size],
        }
    }

    /// Rebuilds a layer from stored parameters with a zeroed activation buffer.
    ///
    /// The shape is re-derived from `weights.data`, so empty or ragged rows
    /// are rejected whatever `rows`/`cols` claim.
    pub fn from_parts(weights: Matrix, biases: Vec<f64>) -> Result<Layer> {
        let weights = Matrix::from_data(weights.data)?;
        check_len("layer biases", weights.rows, biases.len())?;
        let neurons = vec![0.0; biases.len()];
        Ok(Layer { weights, biases, neurons })
    }

    pub fn size(&self) -> usize {
        self.weights.rows
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    pub fn neurons(&self) -> &[f64] {
        &self.neurons
    }

    /// a = σ(W·x + b). Overwrites the activation buffer.
    pub fn feed_from(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let z = self.weights.mul_vec(input)?;
        let a: Vec<f64> = z
            .iter()
            .zip(&self.biases)
            .map(|(s, b)| sigmoid(s + b))
            .collect();
        self.neurons.clone_from(&a);
        Ok(a)
    }

    /// δ = error ⊙ σ'(a), using the activations stored by the last `feed_from`.
    pub fn deltas(&self, error: &[f64], gradient: SigmoidGradient) -> Result<Vec<f64>> {
        check_len("layer error", self.neurons.len(), error.len())?;
        Ok(error
            .iter()
            .zip(&self.neurons)
            .map(|(e, &a)| e * gradient.at_activation(a))
            .collect())
    }

    /// Error seen by the previous layer: Wᵀ·δ.
    pub fn propagate(&self, deltas: &[f64]) -> Result<Vec<f64>> {
        self.weights.transpose_mul_vec(deltas)
    }

    /// w += lr·δ·x and b += lr·δ, moving the output toward the target.
    pub fn apply_deltas(&mut self, deltas: &[f64], inputs: &[f64], lr: f64) -> Result<()> {
        check_len("layer deltas", self.size(), deltas.len())?;
        check_len("layer inputs", self.input_size(), inputs.len())?;

        for ((row, bias), &d) in self.weights.data.iter_mut().zip(&mut self.biases).zip(deltas) {
            for (w, &x) in row.iter_mut().zip(inputs) {
                *w += lr * d * x;
            }
            *bias += lr * d;
        }
        Ok(())
    }
}
