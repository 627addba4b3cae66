use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// Everything one run of the XOR demo needs.
///
/// `seed: None` draws the initial weights from OS entropy; any fixed seed
/// makes the whole run reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub network: NetworkSpec,
    pub epochs: usize,
    pub report_interval: usize,
    pub seed: Option<u64>,
    pub weights_path: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            network: NetworkSpec::default(),
            epochs: 10_000,
            report_interval: 1_000,
            seed: None,
            weights_path: "xor_weights.txt".to_string(),
        }
    }
}

impl RunConfig {
    /// Random source for weight initialisation.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.report_interval)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `RunConfig` from a JSON file; missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.network.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use rand::Rng;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("xor-net-{name}-{}.json", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn defaults_match_the_xor_demo() {
        let config = RunConfig::default();
        assert_eq!(config.epochs, 10_000);
        assert_eq!(config.report_interval, 1_000);
        assert_eq!(config.weights_path, "xor_weights.txt");
        assert_eq!(config.network, NetworkSpec::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = RunConfig { seed: Some(99), ..RunConfig::default() };
        let a: f64 = config.rng().gen();
        let b: f64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: RunConfig = serde_json::from_str(r#"{"epochs": 50, "seed": 7}"#).unwrap();
        assert_eq!(config.epochs, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.weights_path, "xor_weights.txt");
    }

    #[test]
    fn json_round_trip() {
        let path = temp_path("config");
        let config = RunConfig { seed: Some(3), epochs: 12, ..RunConfig::default() };
        config.save_json(&path).unwrap();
        let loaded = RunConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn load_rejects_invalid_network() {
        let path = temp_path("bad-config");
        std::fs::write(
            &path,
            r#"{"network": {"input_size": 2, "hidden_size": 0, "output_size": 1, "learning_rate": 0.5}}"#,
        )
        .unwrap();
        let err = RunConfig::load_json(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, NetworkError::InvalidShape(_)));
    }
}
