use thiserror::Error;

/// Everything that can go wrong while building, running or persisting a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("{inputs} inputs but {targets} targets")]
    LengthMismatch { inputs: usize, targets: usize },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("weights file line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NetworkError::DimensionMismatch { context, expected, actual });
    }
    Ok(())
}
