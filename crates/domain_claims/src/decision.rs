//! Claim decision logic
//!
//! High-risk claims always go to manual review. Low and medium risk claims
//! are approved by a weighted draw; approved claims pay out a fixed share of
//! the claimed amount.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimReference, Entropy, SubmissionId};
use crate::claim::{ClaimSubmission, PaymentStatus};
use crate::error::ClaimError;
use crate::risk::{RiskAssessment, RiskLevel};

/// Probability that a low or medium risk claim is approved
pub const APPROVAL_PROBABILITY: f64 = 0.7;
/// Share of the claimed amount paid on approval
pub const PAYOUT_RATIO: Decimal = dec!(0.85);
/// Days until a referred claim is reviewed
pub const REVIEW_PERIOD_DAYS: i64 = 7;

const MANUAL_REVIEW_STEPS: [&str; 3] = [
    "Claim referred to a senior adjuster for manual review",
    "Adjuster will contact the claimant within 2 business days",
    "Prepare any additional documentation the adjuster requests",
];

const APPROVED_STEPS: [&str; 3] = [
    "Payment is being processed",
    "Funds will be deposited within 3-5 business days",
    "A confirmation email will be sent once payment is released",
];

const ADJUSTER_STEPS: [&str; 3] = [
    "Claim assigned to a claims adjuster",
    "Adjuster will review the submitted documents",
    "The claimant will be contacted within 5 business days",
];

/// Result of processing a claim submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDecision {
    pub submission_id: SubmissionId,
    pub reference_number: ClaimReference,
    pub approved: bool,
    pub risk_level: RiskLevel,
    pub payment_status: PaymentStatus,
    /// Set only for approved claims
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Decimal>,
    pub next_steps: Vec<String>,
    /// Set only for claims referred to manual review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,
    pub decided_at: DateTime<Utc>,
    pub message: String,
}

/// Decides a submission
///
/// `now` is the submission time; the review date of a referred claim is
/// exactly `REVIEW_PERIOD_DAYS` later. The reference number is drawn before
/// the approval draw.
///
/// # Errors
///
/// Returns `ClaimError::InvalidAmount` if the amount is too large to assess
/// or pay out.
pub fn decide(
    submission_id: SubmissionId,
    submission: &ClaimSubmission,
    entropy: &dyn Entropy,
    now: DateTime<Utc>,
) -> Result<ClaimDecision, ClaimError> {
    let risk = RiskAssessment::assess(submission.amount, Some(submission.claim_type))?;
    let reference_number = ClaimReference::generate(entropy);

    let base = ClaimDecision {
        submission_id,
        reference_number,
        approved: false,
        risk_level: risk.level,
        payment_status: PaymentStatus::Pending,
        payment_amount: None,
        next_steps: Vec::new(),
        review_date: None,
        decided_at: now,
        message: String::new(),
    };

    if risk.level == RiskLevel::High {
        return Ok(ClaimDecision {
            next_steps: to_strings(&MANUAL_REVIEW_STEPS),
            review_date: Some(now + Duration::days(REVIEW_PERIOD_DAYS)),
            message: "High-risk claim referred for manual review".to_string(),
            ..base
        });
    }

    let decision = if entropy.next_unit() < APPROVAL_PROBABILITY {
        ClaimDecision {
            approved: true,
            payment_status: PaymentStatus::Processing,
            payment_amount: Some(payout(submission.amount)?),
            next_steps: to_strings(&APPROVED_STEPS),
            message: "Claim approved for payment".to_string(),
            ..base
        }
    } else {
        ClaimDecision {
            next_steps: to_strings(&ADJUSTER_STEPS),
            message: "Claim routed to an adjuster for review".to_string(),
            ..base
        }
    };
    Ok(decision)
}

/// Payment for an approved claim: 85% of the amount, two decimal places
///
/// Halves round away from zero.
pub fn payout(amount: Decimal) -> Result<Decimal, ClaimError> {
    let mut paid = amount
        .checked_mul(PAYOUT_RATIO)
        .ok_or_else(|| ClaimError::InvalidAmount(amount.to_string()))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    paid.rescale(2);
    Ok(paid)
}

fn to_strings(steps: &[&str]) -> Vec<String> {
    steps.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_two_decimals() {
        assert_eq!(payout(dec!(1000)).unwrap().to_string(), "850.00");
        assert_eq!(payout(dec!(100)).unwrap().to_string(), "85.00");
        assert_eq!(payout(dec!(0.5)).unwrap().to_string(), "0.43");
    }

    #[test]
    fn test_payout_rounds_half_away_from_zero() {
        // 0.85 * 0.1 = 0.085
        assert_eq!(payout(dec!(0.1)).unwrap().to_string(), "0.09");
    }

    #[test]
    fn test_payout_of_largest_amount_does_not_panic() {
        let paid = payout(Decimal::MAX).unwrap();
        assert!(paid < Decimal::MAX);
        assert!(paid > Decimal::ZERO);
    }
}
