use thiserror::Error;

/// Rejections raised while validating form input. The message is user-facing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please enter a valid salary amount")]
    InvalidSalary,
    #[error("Please enter a valid savings amount")]
    InvalidSavings,
    #[error("Savings cannot be greater than salary")]
    SavingsExceedSalary,
}

/// Failures reported by a [`crate::KeyValueStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence problems. Recovered locally, never surfaced as a failed mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("record `{key}` is malformed: {reason}")]
    ReadMalformed { key: String, reason: String },
    #[error("failed to write record `{key}`: {reason}")]
    WriteFailed { key: String, reason: String },
}

impl PersistenceError {
    pub fn read_malformed(key: &str, reason: impl ToString) -> Self {
        Self::ReadMalformed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write_failed(key: &str, reason: impl ToString) -> Self {
        Self::WriteFailed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::ReadMalformed { key, .. } | Self::WriteFailed { key, .. } => key,
        }
    }
}
