use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] qotd_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Sync is not configured. Pass --endpoint or set QOTD_SYNC_URL to enable syncing.")]
    SyncNotConfigured,
    #[error("Sync interval must be at least 1 second")]
    InvalidInterval,
}
