use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagwayError>;

#[derive(Debug, Error)]
pub enum TagwayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown output: {0}")]
    UnknownOutput(String),
    #[error("Output configuration rejected: {0}")]
    OutputConfig(String),
}
