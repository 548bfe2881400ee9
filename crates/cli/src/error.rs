use scoring::ScoringError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    ScoringError(#[from] ScoringError),

    #[error("Batch error: {0}")]
    BatchError(String),
}
