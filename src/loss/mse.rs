pub struct MseLoss;

impl MseLoss {
    /// Σ (expected - predicted)² over every output.
    ///
    /// Not divided by the output count; the training loop averages over
    /// examples only.
    pub fn sum_squared(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum()
    }

    /// Per-output error signal: expected - predicted.
    pub fn error(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| b - a)
            .collect()
    }
}
