use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{check_dataset, train_epoch};

/// Trains `network` for exactly `config.epochs` epochs and returns the loss of
/// the last epoch (`0.0` when `epochs` is zero).
///
/// Examples are visited in list order every epoch; there is no shuffling and
/// no early stopping. Every `config.report_interval`-th epoch is logged at
/// `info` level.
///
/// # Errors
/// `EmptyDataset` or `LengthMismatch` for a bad dataset, and
/// `DimensionMismatch` for an example of the wrong width.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<f64> {
    check_dataset(inputs, targets)?;

    info!(epochs = config.epochs, examples = inputs.len(), "training started");

    let mut last_loss = 0.0;
    let mut progress_tx = config.progress_tx.clone();

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let train_loss = train_epoch(network, inputs, targets)?;
        last_loss = train_loss;

        if config.report_interval > 0 && epoch % config.report_interval == 0 {
            info!("Epoch {:>5}/{}, Loss: {:.6}", epoch, config.epochs, train_loss);
        }

        if let Some(tx) = &progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            // Receiver gone: keep training, stop sending.
            if tx.send(stats).is_err() {
                progress_tx = None;
            }
        }
    }

    info!(loss = last_loss, "training complete");
    Ok(last_loss)
}
