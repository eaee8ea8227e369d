use std::io;

/// Failures while loading the embedded kana table
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset file not found: {0}")]
    Missing(String),

    #[error("dataset file is not valid UTF-8: {0}")]
    NotUtf8(String),

    #[error("unable to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no entries")]
    Empty,
}

/// Crate-wide error for the fallible plumbing around a practice session
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("preferences error: {0}")]
    Preferences(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("unable to start logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
