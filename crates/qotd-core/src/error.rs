//! Error types for qotd-core

use thiserror::Error;

/// Result type alias using qotd-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in qotd-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected input (blank quote text, bad endpoint, malformed import entry)
    #[error("Invalid quote: {0}")]
    Validation(String),

    /// Transport failure or non-success HTTP status from the sync server
    #[error("Network error: {0}")]
    Network(String),

    /// Well-formed bytes arrived but could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Persistence layer failure (read or write)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Parse(err.to_string())
    }
}
