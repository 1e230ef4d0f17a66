//! Agent domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the agent domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// Agent with the given ID was not found
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// Profile data failed validation
    #[error("Invalid agent profile: {0}")]
    InvalidProfile(String),
}

impl PartyError {
    /// Creates an AgentNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        PartyError::AgentNotFound(id.to_string())
    }

    /// Creates an InvalidProfile error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        PartyError::InvalidProfile(message.into())
    }
}

impl From<PartyError> for PortError {
    fn from(err: PartyError) -> Self {
        match err {
            PartyError::AgentNotFound(id) => PortError::not_found("Agent", id),
            PartyError::InvalidProfile(message) => PortError::validation(message),
        }
    }
}
