use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xor_net::{accuracy, dataset, evaluate, train_loop, Network, RunConfig};

/// Names a JSON `RunConfig` to use instead of the built-in XOR settings.
const CONFIG_ENV: &str = "XOR_NET_CONFIG";

fn load_config() -> Result<RunConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => RunConfig::load_json(&path)
            .with_context(|| format!("failed to load run config from {path}")),
        Err(_) => Ok(RunConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;

    println!("Learning XOR with a one-hidden-layer sigmoid network\n");

    let (inputs, targets) = dataset::xor();
    println!("Dataset:");
    println!("  Training examples: {}", inputs.len());
    println!("  Input features: {}", inputs[0].len());
    println!("  Output features: {}\n", targets[0].len());

    let spec = config.network;
    let mut network = Network::new(spec, &mut config.rng())?;
    println!("Network:");
    println!("  Input neurons: {}", network.input_size());
    println!("  Hidden neurons: {}", network.hidden_size());
    println!("  Output neurons: {}", network.output_size());
    println!("  Learning rate: {}\n", network.learning_rate());

    train_loop(&mut network, &inputs, &targets, &config.train_config())?;

    println!("{}", "=".repeat(50));
    println!("Input -> Predicted (Rounded) -> Actual");
    println!("{}", "-".repeat(35));
    let predictions = evaluate(&mut network, &inputs, &targets)?;
    for prediction in &predictions {
        println!("{prediction}");
    }
    println!("Accuracy: {:.0}%\n", accuracy(&predictions) * 100.0);

    network
        .save_weights(&config.weights_path)
        .with_context(|| format!("failed to write weights to {}", config.weights_path))?;
    info!(path = %config.weights_path, "done");

    Ok(())
}
