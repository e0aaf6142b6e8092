use thiserror::Error;

#[derive(Debug, Error)]
pub enum AeError {
    #[error("registry fetch failed: {0}")]
    Fetch(String),
    #[error("results data not available")]
    MissingResults,
    #[error("invalid trial identifier: {0:?}")]
    InvalidTrialId(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AeError>;
