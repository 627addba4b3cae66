use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{check_len, NetworkError, Result};

/// Dense row-major weight matrix.
///
/// Rows index destination neurons, columns index source neurons, so a layer
/// with `size` neurons fed by `input_size` values has shape `(size, input_size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Every entry drawn uniformly from [-1, 1].
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-1.0..=1.0);
            }
        }

        res
    }

    /// Builds a matrix from rows, rejecting empty or ragged input.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(NetworkError::InvalidShape("matrix has no entries".into())),
        };
        if let Some(i) = data.iter().position(|row| row.len() != cols) {
            return Err(NetworkError::InvalidShape(format!(
                "row {i} has {} columns, expected {cols}",
                data[i].len()
            )));
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    /// `W·x`: one weighted sum per row.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        check_len("matrix-vector product", self.cols, x.len())?;
        Ok(self
            .data
            .iter()
            .map(|row| row.iter().zip(x).map(|(w, v)| w * v).sum())
            .collect())
    }

    /// `Wᵀ·d`: sends a per-row signal back to the columns.
    pub fn transpose_mul_vec(&self, d: &[f64]) -> Result<Vec<f64>> {
        check_len("transposed matrix-vector product", self.rows, d.len())?;
        let mut res = vec![0.0; self.cols];
        for (row, &di) in self.data.iter().zip(d) {
            for (acc, &w) in res.iter_mut().zip(row) {
                *acc += di * w;
            }
        }
        Ok(res)
    }
}
