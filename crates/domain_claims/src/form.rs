//! Claim filing form state
//!
//! The form is filled in over several steps:
//!
//! 1. Policy and claim type
//! 2. Incident details (date, description, estimated amount)
//! 3. Supporting documents
//! 4. Review and submit
//!
//! Field values are kept exactly as entered; parsing happens only when the
//! form is turned into a `ClaimSubmission`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::{ClaimSubmission, ClaimType, ContactInfo};
use crate::decision::payout;
use crate::error::ClaimError;
use crate::risk::RiskAssessment;

/// Number of data-entry steps before review
pub const FORM_STEPS: u8 = 3;

/// A text field on the claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    PolicyNumber,
    ClaimType,
    IncidentDate,
    Description,
    EstimatedAmount,
    ContactName,
    ContactEmail,
    ContactPhone,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::PolicyNumber => "policy_number",
            FormField::ClaimType => "claim_type",
            FormField::IncidentDate => "incident_date",
            FormField::Description => "description",
            FormField::EstimatedAmount => "estimated_amount",
            FormField::ContactName => "contact_name",
            FormField::ContactEmail => "contact_email",
            FormField::ContactPhone => "contact_phone",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ClaimError;

    /// Accepts snake_case names and the camelCase names web clients send
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "policy_number" | "policyNumber" => Ok(FormField::PolicyNumber),
            "claim_type" | "claimType" => Ok(FormField::ClaimType),
            "incident_date" | "incidentDate" => Ok(FormField::IncidentDate),
            "description" => Ok(FormField::Description),
            "estimated_amount" | "estimatedAmount" => Ok(FormField::EstimatedAmount),
            "contact_name" | "contactName" => Ok(FormField::ContactName),
            "contact_email" | "contactEmail" => Ok(FormField::ContactEmail),
            "contact_phone" | "contactPhone" => Ok(FormField::ContactPhone),
            other => Err(ClaimError::UnknownField(other.to_string())),
        }
    }
}

/// A document attached to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes: 0,
            content_type: None,
        }
    }
}

/// Raw values entered on the claim form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimForm {
    pub policy_number: String,
    pub claim_type: String,
    pub incident_date: String,
    pub description: String,
    pub estimated_amount: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

impl ClaimForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field value
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::PolicyNumber => self.policy_number = value,
            FormField::ClaimType => self.claim_type = value,
            FormField::IncidentDate => self.incident_date = value,
            FormField::Description => self.description = value,
            FormField::EstimatedAmount => self.estimated_amount = value,
            FormField::ContactName => self.contact_name = value,
            FormField::ContactEmail => self.contact_email = value,
            FormField::ContactPhone => self.contact_phone = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::PolicyNumber => &self.policy_number,
            FormField::ClaimType => &self.claim_type,
            FormField::IncidentDate => &self.incident_date,
            FormField::Description => &self.description,
            FormField::EstimatedAmount => &self.estimated_amount,
            FormField::ContactName => &self.contact_name,
            FormField::ContactEmail => &self.contact_email,
            FormField::ContactPhone => &self.contact_phone,
        }
    }

    /// Names of the attached files, in upload order
    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    /// Checks whether the fields required by `step` are filled in
    ///
    /// Steps outside `1..=FORM_STEPS` have no requirements.
    pub fn is_step_complete(&self, step: u8) -> bool {
        match step {
            1 => !self.policy_number.is_empty() && !self.claim_type.is_empty(),
            2 => {
                !self.incident_date.is_empty()
                    && !self.description.is_empty()
                    && !self.estimated_amount.is_empty()
            }
            3 => !self.files.is_empty(),
            _ => true,
        }
    }

    /// Parses the form into a typed submission
    ///
    /// Steps 1 and 2 must be complete. Documents are optional here so that
    /// agents can file on behalf of a claimant who will upload later.
    ///
    /// # Errors
    ///
    /// - `IncompleteForm` if step 1 or 2 is missing a required field
    /// - `UnknownClaimType` if the claim type is not one of the known lines
    /// - `InvalidAmount` if the estimated amount is not a decimal number, or is
    ///   too large to assess or pay out
    /// - `InvalidIncidentDate` if the incident date is not `YYYY-MM-DD`
    pub fn to_submission(&self) -> Result<ClaimSubmission, ClaimError> {
        for step in 1..=2 {
            if !self.is_step_complete(step) {
                return Err(ClaimError::IncompleteForm { step });
            }
        }

        let claim_type: ClaimType = self.claim_type.trim().parse()?;
        let amount = Decimal::from_str(self.estimated_amount.trim())
            .map_err(|_| ClaimError::InvalidAmount(self.estimated_amount.clone()))?;
        RiskAssessment::assess(amount, Some(claim_type))
            .and_then(|_| payout(amount))
            .map_err(|_| ClaimError::InvalidAmount(self.estimated_amount.clone()))?;
        let incident_date = NaiveDate::parse_from_str(self.incident_date.trim(), "%Y-%m-%d")
            .map_err(|_| ClaimError::InvalidIncidentDate(self.incident_date.clone()))?;

        let contact = ContactInfo {
            name: self.contact_name.clone(),
            email: self.contact_email.clone(),
            phone: self.contact_phone.clone(),
        };

        Ok(ClaimSubmission {
            policy_number: self.policy_number.clone(),
            claim_type,
            incident_date,
            description: self.description.clone(),
            amount,
            documents: self.file_names(),
            contact: (!contact.is_empty()).then_some(contact),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ClaimForm {
        let mut form = ClaimForm::new();
        form.set(FormField::PolicyNumber, "POL-2024-001");
        form.set(FormField::ClaimType, "property");
        form.set(FormField::IncidentDate, "2024-03-02");
        form.set(FormField::Description, "Burst pipe");
        form.set(FormField::EstimatedAmount, "4200.50");
        form
    }

    #[test]
    fn test_field_names_accept_both_cases() {
        assert_eq!("policyNumber".parse::<FormField>().unwrap(), FormField::PolicyNumber);
        assert_eq!("estimated_amount".parse::<FormField>().unwrap(), FormField::EstimatedAmount);
        assert!("nickname".parse::<FormField>().is_err());
    }

    #[test]
    fn test_to_submission_parses_values() {
        let submission = filled().to_submission().unwrap();
        assert_eq!(submission.claim_type, ClaimType::Property);
        assert_eq!(submission.amount.to_string(), "4200.50");
        assert_eq!(submission.incident_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert!(submission.contact.is_none());
    }

    #[test]
    fn test_to_submission_rejects_bad_amount() {
        let mut form = filled();
        form.set(FormField::EstimatedAmount, "lots");
        assert!(matches!(form.to_submission(), Err(ClaimError::InvalidAmount(_))));
    }

    #[test]
    fn test_to_submission_rejects_amount_too_large_to_assess() {
        let mut form = filled();
        form.set(FormField::ClaimType, "cyber");
        form.set(FormField::EstimatedAmount, "79228162514264337593543950335");
        match form.to_submission() {
            Err(ClaimError::InvalidAmount(raw)) => assert_eq!(raw, "79228162514264337593543950335"),
            other => panic!("Expected InvalidAmount, got {other:?}"),
        }

        // the same amount is representable once adjusted for property
        form.set(FormField::ClaimType, "property");
        assert!(form.to_submission().is_ok());
    }

    #[test]
    fn test_to_submission_reports_first_incomplete_step() {
        let mut form = filled();
        form.set(FormField::Description, "");
        assert!(matches!(form.to_submission(), Err(ClaimError::IncompleteForm { step: 2 })));

        form.set(FormField::PolicyNumber, "");
        assert!(matches!(form.to_submission(), Err(ClaimError::IncompleteForm { step: 1 })));
    }
}
