//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use core_kernel::ClaimReference;
use domain_claims::{
    Claim, ClaimForm, ClaimProcessor, ClaimStatus, ClaimType, ContactInfo, FormField,
    PaymentStatus, RiskAssessment, UploadedFile,
};

use crate::fixtures::{AmountFixtures, StringFixtures, TemporalFixtures};

/// Builder for tracked claim records
pub struct TestClaimBuilder {
    claim: Claim,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a low-risk property claim under review
    pub fn new() -> Self {
        let amount = AmountFixtures::small();
        Self {
            claim: Claim {
                reference_number: StringFixtures::reference(),
                policy_number: StringFixtures::policy_number().to_string(),
                claim_type: ClaimType::Property,
                submitted_at: TemporalFixtures::submitted_at(),
                incident_date: Some(TemporalFixtures::incident_date()),
                description: StringFixtures::description().to_string(),
                amount,
                status: ClaimStatus::UnderReview,
                payment_status: PaymentStatus::Pending,
                payment_date: None,
                payment_amount: None,
                risk_level: RiskAssessment::assess(amount, Some(ClaimType::Property)).unwrap().level,
                documents: None,
                next_steps: None,
                contact: None,
            },
        }
    }

    pub fn with_reference(mut self, number: u32) -> Self {
        self.claim.reference_number = ClaimReference::new(number).unwrap();
        self
    }

    pub fn with_policy_number(mut self, policy_number: impl Into<String>) -> Self {
        self.claim.policy_number = policy_number.into();
        self
    }

    /// Sets type and amount, recomputing the risk level
    pub fn with_type_and_amount(mut self, claim_type: ClaimType, amount: Decimal) -> Self {
        self.claim.claim_type = claim_type;
        self.claim.amount = amount;
        self.claim.risk_level = RiskAssessment::assess(amount, Some(claim_type)).unwrap().level;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.claim.status = status;
        self
    }

    /// Marks the claim paid in full on `at`
    pub fn paid(mut self, amount: Decimal, at: DateTime<Utc>) -> Self {
        self.claim.status = ClaimStatus::Paid;
        self.claim.payment_status = PaymentStatus::Paid;
        self.claim.payment_amount = Some(amount);
        self.claim.payment_date = Some(at);
        self
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.claim.contact = Some(contact);
        self
    }

    pub fn build(self) -> Claim {
        self.claim
    }
}

/// Builder for claim form inputs
pub struct TestFormBuilder {
    form: ClaimForm,
}

impl Default for TestFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFormBuilder {
    /// Creates a complete, valid, low-risk auto claim form
    pub fn new() -> Self {
        let mut form = ClaimForm::new();
        form.set(FormField::PolicyNumber, StringFixtures::policy_number());
        form.set(FormField::ClaimType, ClaimType::Auto.as_str());
        form.set(FormField::IncidentDate, TemporalFixtures::incident_date_input());
        form.set(FormField::Description, StringFixtures::description());
        form.set(FormField::EstimatedAmount, AmountFixtures::small().to_string());
        form.files.push(UploadedFile::new("photos.zip"));
        Self { form }
    }

    /// A form with nothing filled in
    pub fn empty() -> Self {
        Self { form: ClaimForm::new() }
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        self
    }

    pub fn with_type_and_amount(self, claim_type: ClaimType, amount: Decimal) -> Self {
        self.with(FormField::ClaimType, claim_type.as_str())
            .with(FormField::EstimatedAmount, amount.to_string())
    }

    pub fn with_incident_date(self, date: NaiveDate) -> Self {
        self.with(FormField::IncidentDate, date.format("%Y-%m-%d").to_string())
    }

    pub fn without_files(mut self) -> Self {
        self.form.files.clear();
        self
    }

    pub fn build(self) -> ClaimForm {
        self.form
    }

    /// Enters every value and file into a processor
    pub fn apply_to(self, processor: &ClaimProcessor) {
        for field in ALL_FIELDS {
            processor.update_field(field, self.form.get(field));
        }
        processor.add_files(self.form.files);
    }

    /// The form as a submission request body
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "policy_number": self.form.policy_number,
            "claim_type": self.form.claim_type,
            "incident_date": self.form.incident_date,
            "description": self.form.description,
            "estimated_amount": self.form.estimated_amount,
            "contact_name": self.form.contact_name,
            "contact_email": self.form.contact_email,
            "contact_phone": self.form.contact_phone,
            "files": self.form.files.iter().map(|f| serde_json::json!({ "name": f.name })).collect::<Vec<_>>(),
        })
    }
}

const ALL_FIELDS: [FormField; 8] = [
    FormField::PolicyNumber,
    FormField::ClaimType,
    FormField::IncidentDate,
    FormField::Description,
    FormField::EstimatedAmount,
    FormField::ContactName,
    FormField::ContactEmail,
    FormField::ContactPhone,
];
