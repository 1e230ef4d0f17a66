//! Claim submission DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{Claim, ClaimDecision, ClaimProcessor, FormField, SubmissionOutcome, UploadedFile};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct FileRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub size_bytes: u64,
    pub content_type: Option<String>,
}

impl From<FileRequest> for UploadedFile {
    fn from(req: FileRequest) -> Self {
        UploadedFile {
            name: req.name,
            size_bytes: req.size_bytes,
            content_type: req.content_type,
        }
    }
}

/// A completed claim form
///
/// Values are taken as entered; required fields and formats are checked by
/// the processor so that the errors match what the form reports.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SubmitClaimRequest {
    #[serde(default)]
    #[validate(length(max = 64))]
    pub policy_number: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub claim_type: String,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub incident_date: String,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub estimated_amount: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    #[validate(length(max = 50), nested)]
    pub files: Vec<FileRequest>,
}

impl SubmitClaimRequest {
    /// Copies the request into a processor's form
    pub fn fill(self, processor: &ClaimProcessor) {
        let fields = [
            (FormField::PolicyNumber, self.policy_number),
            (FormField::ClaimType, self.claim_type),
            (FormField::IncidentDate, self.incident_date),
            (FormField::Description, self.description),
            (FormField::EstimatedAmount, self.estimated_amount),
            (FormField::ContactName, self.contact_name),
            (FormField::ContactEmail, self.contact_email),
            (FormField::ContactPhone, self.contact_phone),
        ];
        for (field, value) in fields {
            processor.update_field(field, value);
        }
        processor.add_files(self.files.into_iter().map(UploadedFile::from));
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub decision: ClaimDecision,
    pub claim: Claim,
}

impl From<SubmissionOutcome> for SubmissionResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            decision: outcome.decision,
            claim: outcome.claim,
        }
    }
}
