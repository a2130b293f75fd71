use thiserror::Error;

#[derive(Debug, Error)]
pub enum KrakenError {
    /// The virtualenv could not be activated or has no kraken executable.
    #[error("Failed to activate virtualenv: {0}")]
    EnvironmentResolution(String),

    /// kraken ran but exited non-zero. The output file is never read.
    #[error("kraken exited with status {exit_code}: {stderr}")]
    OcrExecution { exit_code: i32, stderr: String },

    #[error("Unsupported upload: {0}")]
    UnsupportedUpload(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Unexpected(String),
}

impl From<std::io::Error> for KrakenError {
    fn from(err: std::io::Error) -> Self {
        KrakenError::Unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KrakenError>;
