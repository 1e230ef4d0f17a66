//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::ClaimReference;
use domain_claims::{Claim, ClaimPatch, ClaimStatus, ContactInfo, PaymentStatus};

/// Tracking table rows
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimListResponse {
    pub claims: Vec<Claim>,
    pub total: usize,
}

impl ClaimListResponse {
    pub fn new(claims: Vec<Claim>) -> Self {
        Self {
            total: claims.len(),
            claims,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ContactRequest {
    #[validate(length(max = 200))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
}

impl From<ContactRequest> for ContactInfo {
    fn from(req: ContactRequest) -> Self {
        ContactInfo {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
        }
    }
}

/// Partial update of a tracked claim
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateClaimRequest {
    #[validate(length(min = 1, max = 64))]
    pub policy_number: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    pub status: Option<ClaimStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_date: Option<DateTime<Utc>>,
    #[validate(custom(function = "validate_non_negative"))]
    pub payment_amount: Option<Decimal>,
    #[validate(length(max = 50))]
    pub documents: Option<Vec<String>>,
    #[validate(length(max = 20))]
    pub next_steps: Option<Vec<String>>,
    #[validate(nested)]
    pub contact: Option<ContactRequest>,
}

impl From<UpdateClaimRequest> for ClaimPatch {
    fn from(req: UpdateClaimRequest) -> Self {
        ClaimPatch {
            policy_number: req.policy_number,
            description: req.description,
            status: req.status,
            payment_status: req.payment_status,
            payment_date: req.payment_date,
            payment_amount: req.payment_amount,
            documents: req.documents,
            next_steps: req.next_steps,
            contact: req.contact.map(ContactInfo::from),
        }
    }
}

/// Outcome of a delete; removing an unknown reference is not an error
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteClaimResponse {
    pub reference_number: ClaimReference,
    pub removed: usize,
}

fn validate_non_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}
