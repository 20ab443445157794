//! Persisted key-value store error types.

use thiserror::Error;

/// Key-value store error variants.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open store: {0}")]
    Unavailable(String),

    #[error("failed to read {key}: {message}")]
    ReadFailed { key: String, message: String },

    #[error("failed to write {key}: {message}")]
    WriteFailed { key: String, message: String },
}

impl StoreError {
    /// Creates read failure.
    #[must_use]
    pub fn read(key: &str, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Creates write failure.
    #[must_use]
    pub fn write(key: &str, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
