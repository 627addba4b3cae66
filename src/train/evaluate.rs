use std::fmt;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::trainer::check_dataset;

/// Outcome of one example, judged on output index 0 only.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub input: Vec<f64>,
    /// Raw network output at index 0.
    pub predicted: f64,
    /// `predicted` rounded to the nearest integer.
    pub rounded: f64,
    /// Target value at index 0.
    pub target: f64,
    pub correct: bool,
}

impl fmt::Display for Prediction {
    /// `[0, 1] -> 0.9731 (1) -> 1 ✓`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input: Vec<String> = self.input.iter().map(|x| x.to_string()).collect();
        write!(
            f,
            "[{}] -> {:.4} ({}) -> {} {}",
            input.join(", "),
            self.predicted,
            self.rounded,
            self.target,
            if self.correct { "✓" } else { "✗" }
        )
    }
}

/// Runs a forward pass per example and compares the first output to the first target.
pub fn evaluate(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<Vec<Prediction>> {
    check_dataset(inputs, targets)?;

    inputs
        .iter()
        .zip(targets.iter())
        .map(|(input, target)| {
            let output = network.forward(input)?;
            let predicted = output[0];
            let rounded = predicted.round();
            let target = target.first().copied().unwrap_or(f64::NAN);
            Ok(Prediction {
                input: input.clone(),
                predicted,
                rounded,
                target,
                correct: rounded == target,
            })
        })
        .collect()
}

/// Fraction of predictions whose rounded value hit the target.
pub fn accuracy(predictions: &[Prediction]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = predictions.iter().filter(|p| p.correct).count();
    correct as f64 / predictions.len() as f64
}
