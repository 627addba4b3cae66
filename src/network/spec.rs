use serde::{Deserialize, Serialize};

use crate::activation::SigmoidGradient;
use crate::error::{NetworkError, Result};

/// Architecture and learning hyperparameters of a one-hidden-layer network.
///
/// Fields:
/// - `input_size`  — values fed to the hidden layer
/// - `hidden_size` — neurons in the hidden layer
/// - `output_size` — neurons in the output layer
/// - `learning_rate` — step size of every online update; `0.0` freezes the weights
/// - `sigmoid_gradient` — derivative convention used by the backward pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub sigmoid_gradient: SigmoidGradient,
}

impl NetworkSpec {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, learning_rate: f64) -> Self {
        NetworkSpec {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            sigmoid_gradient: SigmoidGradient::default(),
        }
    }

    pub fn with_sigmoid_gradient(mut self, sigmoid_gradient: SigmoidGradient) -> Self {
        self.sigmoid_gradient = sigmoid_gradient;
        self
    }

    /// Rejects zero-sized layers and non-finite or negative learning rates.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ] {
            if size == 0 {
                return Err(NetworkError::InvalidShape(format!("{name} must be positive")));
            }
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(NetworkError::InvalidShape(format!(
                "learning_rate must be finite and non-negative, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Line count of a weights file for this shape: one per matrix row plus one per bias vector.
    pub fn weights_file_lines(&self) -> usize {
        self.hidden_size + 1 + self.output_size + 1
    }
}

impl Default for NetworkSpec {
    /// The 2-4-1 XOR network with learning rate 0.5.
    fn default() -> Self {
        NetworkSpec::new(2, 4, 1, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_xor_shape() {
        let spec = NetworkSpec::default();
        assert_eq!((spec.input_size, spec.hidden_size, spec.output_size), (2, 4, 1));
        assert_eq!(spec.learning_rate, 0.5);
        assert_eq!(spec.weights_file_lines(), 7);
        spec.validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_specs() {
        assert!(NetworkSpec::new(0, 4, 1, 0.5).validate().is_err());
        assert!(NetworkSpec::new(2, 0, 1, 0.5).validate().is_err());
        assert!(NetworkSpec::new(2, 4, 0, 0.5).validate().is_err());
        assert!(NetworkSpec::new(2, 4, 1, -0.1).validate().is_err());
        assert!(NetworkSpec::new(2, 4, 1, f64::NAN).validate().is_err());
        NetworkSpec::new(2, 4, 1, 0.0).validate().unwrap();
    }

    #[test]
    fn sigmoid_gradient_defaults_when_absent_from_json() {
        let spec: NetworkSpec = serde_json::from_str(
            r#"{"input_size":3,"hidden_size":5,"output_size":2,"learning_rate":0.1}"#,
        )
        .unwrap();
        assert_eq!(spec.sigmoid_gradient, SigmoidGradient::Reapplied);
        assert_eq!(spec.hidden_size, 5);
    }
}
