//! Core error types used across the system

use thiserror::Error;
use crate::identifiers::ReferenceError;
use crate::ports::PortError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Reference error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Port error: {0}")]
    Port(#[from] PortError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
