//! Storage error types
//!
//! This module defines the errors raised by the storage adapters and their
//! mapping onto the shared `PortError`.

use std::path::PathBuf;

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters that cannot be used as a file stem
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The data directory could not be created or is not a directory
    #[error("Storage directory unavailable: {path}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a value failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A failure injected by the in-memory adapter
    #[error("Injected failure: {0}")]
    Injected(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StorageError> for PortError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::InvalidKey(key) => {
                PortError::validation_field(format!("invalid storage key {key:?}"), "key")
            }
            StorageError::DirectoryUnavailable { .. } | StorageError::Io { .. } => {
                let message = error.to_string();
                PortError::Connection {
                    message,
                    source: Some(Box::new(error)),
                }
            }
            StorageError::Injected(message) => PortError::internal(message),
        }
    }
}
