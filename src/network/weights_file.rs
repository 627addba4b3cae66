//! Plain-text weight dump.
//!
//! Layout, one line each:
//! - every row of the input→hidden matrix
//! - the hidden biases
//! - every row of the hidden→output matrix
//! - the output biases
//!
//! Each value is followed by a single space. Lines are joined with `\n` and
//! the last line has no terminator. The file carries no dimensions, so
//! loading needs the `NetworkSpec` it was written from.

use std::fmt::Write as _;

use tracing::info;

use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::spec::NetworkSpec;

fn push_values(out: &mut String, values: &[f64]) {
    for v in values {
        // Writing into a String cannot fail.
        let _ = write!(out, "{v} ");
    }
}

fn parse_values(line_no: usize, line: &str, expected: usize) -> Result<Vec<f64>> {
    let values = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|e| NetworkError::Parse {
                line: line_no,
                message: format!("bad number {tok:?}: {e}"),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() != expected {
        return Err(NetworkError::Parse {
            line: line_no,
            message: format!("expected {expected} values, found {}", values.len()),
        });
    }
    Ok(values)
}

impl Network {
    /// Renders all weights and biases in the plain-text layout.
    pub fn to_weights_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.spec().weights_file_lines());
        for layer in self.layers() {
            for row in &layer.weights.data {
                let mut line = String::new();
                push_values(&mut line, row);
                lines.push(line);
            }
            let mut line = String::new();
            push_values(&mut line, &layer.biases);
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Writes `to_weights_text()` to `path`.
    pub fn save_weights(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_weights_text())?;
        info!(path, "weights saved");
        Ok(())
    }

    /// Parses the plain-text layout back into a network shaped like `spec`.
    pub fn from_weights_text(text: &str, spec: NetworkSpec) -> Result<Network> {
        spec.validate()?;

        let lines: Vec<&str> = text.lines().collect();
        if lines.len() != spec.weights_file_lines() {
            return Err(NetworkError::Parse {
                line: lines.len(),
                message: format!(
                    "expected {} lines, found {}",
                    spec.weights_file_lines(),
                    lines.len()
                ),
            });
        }

        let mut cursor = lines.iter().enumerate().map(|(i, line)| (i + 1, *line));
        let mut layers = Vec::with_capacity(2);
        for (size, input_size) in [
            (spec.hidden_size, spec.input_size),
            (spec.output_size, spec.hidden_size),
        ] {
            let mut rows = Vec::with_capacity(size);
            for (line_no, line) in cursor.by_ref().take(size) {
                rows.push(parse_values(line_no, line, input_size)?);
            }
            let (line_no, line) = cursor.next().ok_or_else(|| NetworkError::Parse {
                line: lines.len(),
                message: "missing bias line".into(),
            })?;
            let biases = parse_values(line_no, line, size)?;
            layers.push(Layer::from_parts(Matrix::from_data(rows)?, biases)?);
        }

        Network::from_layers(spec, layers)
    }

    /// Reads a file written by `save_weights`.
    pub fn load_weights(path: &str, spec: NetworkSpec) -> Result<Network> {
        let text = std::fs::read_to_string(path)?;
        Network::from_weights_text(&text, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_network() -> Network {
        let hidden = Layer::from_parts(
            Matrix::from_data(vec![vec![0.5, -1.0], vec![0.25, 0.75]]).unwrap(),
            vec![0.1, -0.1],
        )
        .unwrap();
        let output = Layer::from_parts(Matrix::from_data(vec![vec![1.5, -2.0]]).unwrap(), vec![0.0]).unwrap();
        Network::from_layers(NetworkSpec::new(2, 2, 1, 0.5), vec![hidden, output]).unwrap()
    }

    #[test]
    fn renders_the_documented_layout() {
        let text = fixed_network().to_weights_text();
        assert_eq!(text, "0.5 -1 \n0.25 0.75 \n0.1 -0.1 \n1.5 -2 \n0 ");
    }

    #[test]
    fn parses_rendered_text_back() {
        let net = fixed_network();
        let loaded = Network::from_weights_text(&net.to_weights_text(), *net.spec()).unwrap();
        assert_eq!(loaded.layers()[0].weights, net.layers()[0].weights);
        assert_eq!(loaded.layers()[1].biases, net.layers()[1].biases);
    }

    #[test]
    fn tolerates_a_trailing_newline() {
        let text = format!("{}\n", fixed_network().to_weights_text());
        assert!(Network::from_weights_text(&text, NetworkSpec::new(2, 2, 1, 0.5)).is_ok());
    }

    #[test]
    fn rejects_wrong_line_count() {
        let err = Network::from_weights_text("0.5 -1 \n0.25 0.75 ", NetworkSpec::new(2, 2, 1, 0.5)).unwrap_err();
        assert!(matches!(err, NetworkError::Parse { .. }));
    }

    #[test]
    fn rejects_bad_tokens_and_widths() {
        let spec = NetworkSpec::new(2, 2, 1, 0.5);
        let bad_token = "0.5 x \n0.25 0.75 \n0.1 -0.1 \n1.5 -2 \n0 ";
        match Network::from_weights_text(bad_token, spec) {
            Err(NetworkError::Parse { line: 1, .. }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        let short_bias = "0.5 -1 \n0.25 0.75 \n0.1 \n1.5 -2 \n0 ";
        match Network::from_weights_text(short_bias, spec) {
            Err(NetworkError::Parse { line: 3, .. }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn save_reports_unwritable_path() {
        let dir = std::env::temp_dir().join(format!("xor-net-missing-{}", std::process::id()));
        let path = dir.join("weights.txt");
        let err = fixed_network().save_weights(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
