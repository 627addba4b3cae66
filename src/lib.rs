pub mod activation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative, SigmoidGradient};
pub use config::RunConfig;
pub use error::{NetworkError, Result};
pub use layers::dense::Layer;
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use train::{accuracy, evaluate, train_epoch, train_loop, EpochStats, Prediction, TrainConfig};
