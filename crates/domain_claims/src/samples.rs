//! Built-in sample claims
//!
//! Seeded into every store on load so a fresh desk has something to show.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal_macros::dec;

use core_kernel::ClaimReference;
use crate::claim::{Claim, ClaimStatus, ClaimType, ContactInfo, PaymentStatus};
use crate::risk::RiskLevel;

/// The fixed sample set, in display order
pub fn sample_claims() -> Vec<Claim> {
    vec![
        Claim {
            reference_number: reference(240117),
            policy_number: "POL-2024-001".to_string(),
            claim_type: ClaimType::Property,
            submitted_at: at("2024-01-15T09:30:00Z"),
            incident_date: NaiveDate::from_ymd_opt(2024, 1, 12),
            description: "Water damage to warehouse roof after storm".to_string(),
            amount: dec!(12500.00),
            status: ClaimStatus::Paid,
            payment_status: PaymentStatus::Paid,
            payment_date: Some(at("2024-01-29T14:00:00Z")),
            payment_amount: Some(dec!(10625.00)),
            risk_level: RiskLevel::Medium,
            documents: Some(vec![
                "roof_photos.zip".to_string(),
                "contractor_estimate.pdf".to_string(),
            ]),
            next_steps: None,
            contact: Some(ContactInfo {
                name: "Dana Whitfield".to_string(),
                email: "dana.whitfield@example.com".to_string(),
                phone: "555-0142".to_string(),
            }),
        },
        Claim {
            reference_number: reference(240208),
            policy_number: "POL-2024-014".to_string(),
            claim_type: ClaimType::Cyber,
            submitted_at: at("2024-02-08T16:45:00Z"),
            incident_date: NaiveDate::from_ymd_opt(2024, 2, 6),
            description: "Ransomware incident affecting billing systems".to_string(),
            amount: dec!(48000.00),
            status: ClaimStatus::UnderReview,
            payment_status: PaymentStatus::Pending,
            payment_date: None,
            payment_amount: None,
            risk_level: RiskLevel::High,
            documents: Some(vec!["incident_report.pdf".to_string()]),
            next_steps: Some(vec![
                "Forensic review scheduled".to_string(),
                "Awaiting breach counsel report".to_string(),
            ]),
            contact: None,
        },
        Claim {
            reference_number: reference(240222),
            policy_number: "POL-2023-187".to_string(),
            claim_type: ClaimType::Auto,
            submitted_at: at("2024-02-22T11:10:00Z"),
            incident_date: NaiveDate::from_ymd_opt(2024, 2, 20),
            description: "Rear-end collision, delivery van".to_string(),
            amount: dec!(3400.00),
            status: ClaimStatus::Approved,
            payment_status: PaymentStatus::Processing,
            payment_date: None,
            payment_amount: Some(dec!(2890.00)),
            risk_level: RiskLevel::Low,
            documents: Some(vec![
                "police_report.pdf".to_string(),
                "repair_quote.pdf".to_string(),
            ]),
            next_steps: Some(vec!["Payment is being processed".to_string()]),
            contact: None,
        },
        Claim {
            reference_number: reference(240305),
            policy_number: "POL-2024-033".to_string(),
            claim_type: ClaimType::WorkersComp,
            submitted_at: at("2024-03-05T08:20:00Z"),
            incident_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            description: "Employee back injury while lifting stock".to_string(),
            amount: dec!(7800.00),
            status: ClaimStatus::AdditionalInfo,
            payment_status: PaymentStatus::Pending,
            payment_date: None,
            payment_amount: None,
            risk_level: RiskLevel::Medium,
            documents: None,
            next_steps: Some(vec!["Medical report requested from claimant".to_string()]),
            contact: Some(ContactInfo {
                name: "Luis Ortega".to_string(),
                email: "l.ortega@example.com".to_string(),
                phone: "555-0199".to_string(),
            }),
        },
    ]
}

fn reference(number: u32) -> ClaimReference {
    // Every literal above is inside the valid range
    ClaimReference::new(number).unwrap_or(ClaimReference::FIRST)
}

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_samples_have_unique_references() {
        let samples = sample_claims();
        let unique: HashSet<_> = samples.iter().map(|c| c.reference_number).collect();
        assert_eq!(unique.len(), samples.len());
    }

    #[test]
    fn test_sample_timestamps_parse() {
        for claim in sample_claims() {
            assert!(claim.submitted_at.timestamp() > 0);
        }
    }
}
