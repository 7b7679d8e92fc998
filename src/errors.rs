use std::result::Result as StdResult;

use expense_config::ConfigError;
use expense_core::{StoreError, ValidationError};
use thiserror::Error;

/// Unified error type for the tracker facade.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TrackerError::Store(StoreError::Io(io)),
            ConfigError::Serde(message) => TrackerError::Config(message),
        }
    }
}
