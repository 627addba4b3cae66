use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`          — exact number of full passes over the training data
/// - `report_interval` — log the loss every this many epochs; `0` disables it
/// - `progress_tx`     — optional channel sender; one `EpochStats` is sent per
///                       completed epoch. A dropped receiver only silences the
///                       channel, training still runs every epoch.
pub struct TrainConfig {
    pub epochs: usize,
    pub report_interval: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(epochs: usize, report_interval: usize) -> Self {
        TrainConfig {
            epochs,
            report_interval,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
