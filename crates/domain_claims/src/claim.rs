//! Claim record

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::ClaimReference;
use crate::decision::ClaimDecision;
use crate::error::ClaimError;
use crate::risk::RiskLevel;

/// Line of business the claim is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Property,
    Liability,
    WorkersComp,
    Auto,
    Professional,
    Cyber,
}

impl ClaimType {
    pub const ALL: [ClaimType; 6] = [
        ClaimType::Property,
        ClaimType::Liability,
        ClaimType::WorkersComp,
        ClaimType::Auto,
        ClaimType::Professional,
        ClaimType::Cyber,
    ];

    /// Wire name, as stored and as submitted by form clients
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Property => "property",
            ClaimType::Liability => "liability",
            ClaimType::WorkersComp => "workers_comp",
            ClaimType::Auto => "auto",
            ClaimType::Professional => "professional",
            ClaimType::Cyber => "cyber",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ClaimError::UnknownClaimType(s.to_string()))
    }
}

/// Review status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Received, not yet picked up
    Submitted,
    /// With an adjuster
    UnderReview,
    /// Waiting on the claimant for more information
    AdditionalInfo,
    Approved,
    Denied,
    /// Settled
    Paid,
}

impl ClaimStatus {
    /// Returns true while the claim still needs work from someone
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Submitted | ClaimStatus::UnderReview | ClaimStatus::AdditionalInfo
        )
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ClaimStatus::Submitted),
            "under_review" => Ok(ClaimStatus::UnderReview),
            "additional_info" => Ok(ClaimStatus::AdditionalInfo),
            "approved" => Ok(ClaimStatus::Approved),
            "denied" => Ok(ClaimStatus::Denied),
            "paid" => Ok(ClaimStatus::Paid),
            other => Err(ClaimError::UnknownStatus(other.to_string())),
        }
    }
}

/// Disbursement state, independent of review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
    Failed,
}

/// Claimant contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// A claim as tracked by the desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Human-readable reference, unique within a store
    pub reference_number: ClaimReference,
    /// Policy the claim is filed against
    pub policy_number: String,
    pub claim_type: ClaimType,
    pub submitted_at: DateTime<Utc>,
    /// Date of the loss event, when the claimant supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_date: Option<NaiveDate>,
    pub description: String,
    /// Claimed amount
    pub amount: Decimal,
    pub status: ClaimStatus,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Decimal>,
    /// Assigned once at submission
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl Claim {
    /// Builds the tracked record for a decided submission
    pub fn from_decision(submission: &ClaimSubmission, decision: &ClaimDecision) -> Self {
        let status = if decision.approved {
            ClaimStatus::Approved
        } else {
            ClaimStatus::UnderReview
        };

        Self {
            reference_number: decision.reference_number,
            policy_number: submission.policy_number.clone(),
            claim_type: submission.claim_type,
            submitted_at: decision.decided_at,
            incident_date: Some(submission.incident_date),
            description: submission.description.clone(),
            amount: submission.amount,
            status,
            payment_status: decision.payment_status,
            payment_date: None,
            payment_amount: decision.payment_amount,
            risk_level: decision.risk_level,
            documents: (!submission.documents.is_empty()).then(|| submission.documents.clone()),
            next_steps: Some(decision.next_steps.clone()),
            contact: submission.contact.clone(),
        }
    }

    /// Shallow-merges every field set on the patch
    pub fn apply(&mut self, patch: ClaimPatch) {
        let ClaimPatch {
            policy_number,
            description,
            status,
            payment_status,
            payment_date,
            payment_amount,
            documents,
            next_steps,
            contact,
        } = patch;

        if let Some(v) = policy_number {
            self.policy_number = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = payment_status {
            self.payment_status = v;
        }
        if let Some(v) = payment_date {
            self.payment_date = Some(v);
        }
        if let Some(v) = payment_amount {
            self.payment_amount = Some(v);
        }
        if let Some(v) = documents {
            self.documents = Some(v);
        }
        if let Some(v) = next_steps {
            self.next_steps = Some(v);
        }
        if let Some(v) = contact {
            self.contact = Some(v);
        }
    }
}

/// Partial update for a stored claim
///
/// Reference number, claim type, amount, submission time and risk level are
/// fixed at submission and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

impl ClaimPatch {
    pub fn status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Marks the claim settled: status and payment status `paid`
    pub fn paid(amount: Decimal, at: DateTime<Utc>) -> Self {
        Self {
            status: Some(ClaimStatus::Paid),
            payment_status: Some(PaymentStatus::Paid),
            payment_date: Some(at),
            payment_amount: Some(amount),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validated, typed snapshot of a claim form, ready for a decision
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSubmission {
    pub policy_number: String,
    pub claim_type: ClaimType,
    pub incident_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub documents: Vec<String>,
    pub contact: Option<ContactInfo>,
}
