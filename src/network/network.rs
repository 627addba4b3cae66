use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_len, Result};
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;
use crate::network::spec::NetworkSpec;

/// Feedforward network: input → sigmoid hidden layer → sigmoid output layer.
///
/// Layers are kept as an ordered sequence; `layers[0]` is the hidden layer and
/// the last entry is the output layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    spec: NetworkSpec,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with weights and biases drawn from `rng`.
    pub fn new<R: Rng>(spec: NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;
        let layers = vec![
            Layer::new(spec.hidden_size, spec.input_size, rng),
            Layer::new(spec.output_size, spec.hidden_size, rng),
        ];
        debug!(
            input = spec.input_size,
            hidden = spec.hidden_size,
            output = spec.output_size,
            learning_rate = spec.learning_rate,
            "network created"
        );
        Ok(Network { spec, layers })
    }

    /// Assembles a network from existing layers, checking them against `spec`.
    pub fn from_layers(spec: NetworkSpec, layers: Vec<Layer>) -> Result<Network> {
        spec.validate()?;
        check_len("layer count", 2, layers.len())?;
        let shapes = [
            (spec.hidden_size, spec.input_size),
            (spec.output_size, spec.hidden_size),
        ];
        let layers = layers
            .into_iter()
            .zip(shapes)
            .map(|(layer, (size, input_size))| {
                let layer = Layer::from_parts(layer.weights, layer.biases)?;
                check_len("layer size", size, layer.size())?;
                check_len("layer input size", input_size, layer.input_size())?;
                Ok(layer)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Network { spec, layers })
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn input_size(&self) -> usize {
        self.spec.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.spec.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.spec.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.spec.learning_rate
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Forward pass; stores activations in each layer for the following `backward`.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        check_len("forward input", self.spec.input_size, input.len())?;
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current)?;
        }
        Ok(current)
    }

    /// One online update toward `target`.
    ///
    /// Must follow a `forward` call on the same `input`: the deltas are built
    /// from the activations that call left behind.
    pub fn backward(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        check_len("backward input", self.spec.input_size, input.len())?;
        check_len("backward target", self.spec.output_size, target.len())?;

        let gradient = self.spec.sigmoid_gradient;
        let lr = self.spec.learning_rate;
        let output = &self.layers[self.layers.len() - 1];
        let mut error = MseLoss::error(output.neurons(), target);

        for i in (0..self.layers.len()).rev() {
            let deltas = self.layers[i].deltas(&error, gradient)?;

            // Propagate through the weights before this layer is updated.
            if i > 0 {
                error = self.layers[i].propagate(&deltas)?;
            }

            let (before, rest) = self.layers.split_at_mut(i);
            let source = match before.last() {
                Some(prev) => prev.neurons(),
                None => input,
            };
            rest[0].apply_deltas(&deltas, source, lr)?;
        }
        Ok(())
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let raw: Network = serde_json::from_reader(reader)?;
        Network::from_layers(raw.spec, raw.layers)
    }
}
