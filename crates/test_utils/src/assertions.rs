//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use chrono::Duration;
use rust_decimal::Decimal;

use domain_claims::{Claim, ClaimDecision, ClaimStatus, PaymentStatus, RiskLevel};

/// Asserts that a string is a well-formed claim reference (`CLM-` and six digits)
pub fn assert_reference_format(reference: &str) {
    let digits = reference
        .strip_prefix("CLM-")
        .unwrap_or_else(|| panic!("Reference {reference:?} does not start with CLM-"));
    assert!(
        digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()),
        "Reference {reference:?} does not end in six digits"
    );
    assert_ne!(digits.as_bytes()[0], b'0', "Reference {reference:?} has a leading zero");
}

/// Asserts that a decision referred the claim to manual review
///
/// # Panics
///
/// Panics unless the decision is high risk, unapproved, pending payment,
/// and has a review date exactly seven days after the decision.
pub fn assert_manual_review(decision: &ClaimDecision) {
    assert_eq!(decision.risk_level, RiskLevel::High, "Expected high risk: {decision:?}");
    assert!(!decision.approved, "High-risk claim was approved: {decision:?}");
    assert_eq!(decision.payment_status, PaymentStatus::Pending);
    assert_eq!(decision.payment_amount, None);
    assert_eq!(
        decision.review_date,
        Some(decision.decided_at + Duration::days(7)),
        "Review date is not seven days after the decision"
    );
}

/// Asserts that a decision approved the claim with the standard payout
pub fn assert_approved_with_payout(decision: &ClaimDecision, expected_payout: Decimal) {
    assert!(decision.approved, "Expected approval: {decision:?}");
    assert_ne!(decision.risk_level, RiskLevel::High);
    assert_eq!(decision.payment_status, PaymentStatus::Processing);
    assert_eq!(
        decision.payment_amount,
        Some(expected_payout),
        "Payout mismatch for {}",
        decision.reference_number
    );
    assert_eq!(decision.review_date, None);
}

/// Asserts that a tracked claim carries the decision's outcome
pub fn assert_claim_matches_decision(claim: &Claim, decision: &ClaimDecision) {
    assert_eq!(claim.reference_number, decision.reference_number);
    assert_eq!(claim.risk_level, decision.risk_level);
    assert_eq!(claim.payment_status, decision.payment_status);
    assert_eq!(claim.payment_amount, decision.payment_amount);
    let expected_status = if decision.approved {
        ClaimStatus::Approved
    } else {
        ClaimStatus::UnderReview
    };
    assert_eq!(claim.status, expected_status);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format_accepts_valid() {
        assert_reference_format("CLM-482913");
    }

    #[test]
    #[should_panic(expected = "does not start with CLM-")]
    fn test_reference_format_rejects_prefix() {
        assert_reference_format("CLAIM-482913");
    }

    #[test]
    #[should_panic(expected = "six digits")]
    fn test_reference_format_rejects_short() {
        assert_reference_format("CLM-4829");
    }
}
