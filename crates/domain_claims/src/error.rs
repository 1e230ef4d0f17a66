//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim form step {step} is incomplete")]
    IncompleteForm { step: u8 },

    #[error("Unknown claim type: {0:?}")]
    UnknownClaimType(String),

    #[error("Unknown claim status: {0:?}")]
    UnknownStatus(String),

    #[error("Unknown form field: {0:?}")]
    UnknownField(String),

    #[error("Estimated amount is not a decimal number: {0:?}")]
    InvalidAmount(String),

    #[error("Incident date must be YYYY-MM-DD: {0:?}")]
    InvalidIncidentDate(String),

    #[error("A submission is already being processed for this form")]
    SubmissionInProgress,

    #[error("Decision task failed: {0}")]
    DecisionTaskFailed(String),
}

impl ClaimError {
    /// Returns true for errors caused by what the user entered
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClaimError::IncompleteForm { .. }
                | ClaimError::UnknownClaimType(_)
                | ClaimError::UnknownStatus(_)
                | ClaimError::UnknownField(_)
                | ClaimError::InvalidAmount(_)
                | ClaimError::InvalidIncidentDate(_)
        )
    }
}
