//! Tests for the claim record, patches, and risk classification

use chrono::{Duration, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimReference, ScriptedEntropy, SubmissionId};

use domain_claims::claim::{Claim, ClaimPatch, ClaimStatus, ClaimSubmission, ClaimType, PaymentStatus};
use domain_claims::decision::{decide, payout};
use domain_claims::error::ClaimError;
use domain_claims::risk::{classify, RiskAssessment, RiskLevel};

fn submission(amount: Decimal, claim_type: ClaimType) -> ClaimSubmission {
    ClaimSubmission {
        policy_number: "POL-2024-100".to_string(),
        claim_type,
        incident_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        description: "Test loss".to_string(),
        amount,
        documents: vec!["photo.jpg".to_string()],
        contact: None,
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    fn approved_claim() -> Claim {
        let sub = submission(dec!(1000), ClaimType::Auto);
        let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.1, 555555), Utc::now()).unwrap();
        Claim::from_decision(&sub, &decision)
    }

    #[test]
    fn test_claim_type_round_trips_wire_names() {
        for claim_type in ClaimType::ALL {
            assert_eq!(claim_type.as_str().parse::<ClaimType>().unwrap(), claim_type);
        }
        assert!("marine".parse::<ClaimType>().is_err());
    }

    #[test]
    fn test_claim_status_parse() {
        assert_eq!("under_review".parse::<ClaimStatus>().unwrap(), ClaimStatus::UnderReview);
        assert!("closed".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_open_statuses() {
        assert!(ClaimStatus::Submitted.is_open());
        assert!(ClaimStatus::AdditionalInfo.is_open());
        assert!(!ClaimStatus::Paid.is_open());
        assert!(!ClaimStatus::Denied.is_open());
    }

    #[test]
    fn test_from_decision_approved() {
        let claim = approved_claim();

        assert_eq!(claim.reference_number.to_string(), "CLM-555555");
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert_eq!(claim.payment_status, PaymentStatus::Processing);
        assert_eq!(claim.payment_amount, Some(dec!(850.00)));
        assert_eq!(claim.risk_level, RiskLevel::Low);
        assert_eq!(claim.documents, Some(vec!["photo.jpg".to_string()]));
        assert_eq!(claim.next_steps.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_from_decision_not_approved_is_under_review() {
        let sub = submission(dec!(1000), ClaimType::Auto);
        let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.9, 555555), Utc::now()).unwrap();
        let claim = Claim::from_decision(&sub, &decision);

        assert_eq!(claim.status, ClaimStatus::UnderReview);
        assert_eq!(claim.payment_status, PaymentStatus::Pending);
        assert_eq!(claim.payment_amount, None);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut claim = approved_claim();
        let original = claim.clone();

        claim.apply(ClaimPatch::status(ClaimStatus::Paid));

        assert_eq!(claim.status, ClaimStatus::Paid);
        assert_eq!(claim.payment_status, original.payment_status);
        assert_eq!(claim.description, original.description);
        assert_eq!(claim.risk_level, original.risk_level);
    }

    #[test]
    fn test_patch_paid() {
        let mut claim = approved_claim();
        let paid_at = Utc::now();

        claim.apply(ClaimPatch::paid(dec!(850.00), paid_at));

        assert_eq!(claim.status, ClaimStatus::Paid);
        assert_eq!(claim.payment_status, PaymentStatus::Paid);
        assert_eq!(claim.payment_date, Some(paid_at));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut claim = approved_claim();
        let original = claim.clone();
        let patch = ClaimPatch::default();

        assert!(patch.is_empty());
        claim.apply(patch);
        assert_eq!(claim, original);
    }

    #[test]
    fn test_claim_json_uses_snake_case_and_decimal_strings() {
        let claim = approved_claim();
        let json = serde_json::to_value(&claim).unwrap();

        assert_eq!(json["claim_type"], "auto");
        assert_eq!(json["status"], "approved");
        assert_eq!(json["payment_status"], "processing");
        assert_eq!(json["risk_level"], "low");
        assert_eq!(json["amount"], "1000");
        assert_eq!(json["payment_amount"], "850.00");
        assert!(json.get("payment_date").is_none());

        let back: Claim = serde_json::from_value(json).unwrap();
        assert_eq!(back, claim);
    }
}

// ============================================================================
// Risk Tests
// ============================================================================

mod risk_tests {
    use super::*;

    #[test]
    fn test_multipliers_by_type() {
        let cases = [
            (ClaimType::Cyber, dec!(1.5)),
            (ClaimType::Professional, dec!(1.3)),
            (ClaimType::Liability, dec!(1.2)),
            (ClaimType::WorkersComp, dec!(1.1)),
            (ClaimType::Property, dec!(1.0)),
            (ClaimType::Auto, dec!(0.9)),
        ];
        for (claim_type, expected) in cases {
            assert_eq!(RiskAssessment::assess(dec!(100), Some(claim_type)).unwrap().multiplier, expected);
        }
    }

    #[test]
    fn test_boundaries_after_multiplier() {
        // 12500 * 1.2 = 15000 exactly
        assert_eq!(classify(dec!(12500), Some(ClaimType::Liability)).unwrap(), RiskLevel::Medium);
        // 5000 / 0.9 is not exact, 5556 * 0.9 = 5000.4
        assert_eq!(classify(dec!(5556), Some(ClaimType::Auto)).unwrap(), RiskLevel::Medium);
        assert_eq!(classify(dec!(5555), Some(ClaimType::Auto)).unwrap(), RiskLevel::Low);
    }

    #[test]
    fn test_negative_amount_is_low() {
        assert_eq!(classify(dec!(-20000), Some(ClaimType::Cyber)).unwrap(), RiskLevel::Low);
    }

    proptest! {
        #[test]
        fn classification_is_pure(cents in 0i64..1_000_000_000i64, idx in 0usize..6) {
            let amount = Decimal::new(cents, 2);
            let claim_type = ClaimType::ALL[idx];
            prop_assert_eq!(
                RiskAssessment::assess(amount, Some(claim_type)).unwrap(),
                RiskAssessment::assess(amount, Some(claim_type)).unwrap()
            );
        }

        #[test]
        fn tier_matches_adjusted_amount(cents in 0i64..1_000_000_000i64, idx in 0usize..6) {
            let amount = Decimal::new(cents, 2);
            let assessment = RiskAssessment::assess(amount, Some(ClaimType::ALL[idx])).unwrap();
            let expected = if assessment.adjusted_amount > dec!(15000) {
                RiskLevel::High
            } else if assessment.adjusted_amount > dec!(5000) {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            prop_assert_eq!(assessment.level, expected);
        }

        #[test]
        fn any_amount_is_assessed_or_rejected(
            lo in any::<u32>(),
            mid in any::<u32>(),
            hi in any::<u32>(),
            negative in any::<bool>(),
            scale in 0u32..=28,
            idx in 0usize..6,
        ) {
            let amount = Decimal::from_parts(lo, mid, hi, negative, scale);
            match RiskAssessment::assess(amount, Some(ClaimType::ALL[idx])) {
                Ok(assessment) => prop_assert_eq!(assessment.amount, amount),
                Err(e) => prop_assert!(matches!(e, ClaimError::InvalidAmount(_))),
            }
            prop_assert!(payout(amount).is_ok());
        }
    }

    #[test]
    fn test_overflowing_adjusted_amount_is_invalid() {
        let err = classify(Decimal::MAX, Some(ClaimType::Cyber)).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidAmount(_)));
        assert!(classify(Decimal::MAX, Some(ClaimType::Auto)).is_ok());
    }
}

// ============================================================================
// Decision Tests
// ============================================================================

mod decision_tests {
    use super::*;

    #[test]
    fn test_cyber_20000_goes_to_manual_review() {
        let now = Utc::now();
        let sub = submission(dec!(20000), ClaimType::Cyber);
        // even a winning draw cannot approve a high-risk claim
        let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.0, 123456), now).unwrap();

        assert!(!decision.approved);
        assert_eq!(decision.risk_level, RiskLevel::High);
        assert_eq!(decision.payment_status, PaymentStatus::Pending);
        assert_eq!(decision.payment_amount, None);
        assert_eq!(decision.next_steps.len(), 3);
        assert_eq!(decision.review_date, Some(now + Duration::days(7)));
    }

    #[test]
    fn test_auto_1000_approved_pays_850() {
        let sub = submission(dec!(1000), ClaimType::Auto);
        let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.69, 123456), Utc::now()).unwrap();

        assert!(decision.approved);
        assert_eq!(decision.risk_level, RiskLevel::Low);
        assert_eq!(decision.payment_status, PaymentStatus::Processing);
        assert_eq!(decision.payment_amount.map(|a| a.to_string()), Some("850.00".to_string()));
        assert_eq!(decision.next_steps.len(), 3);
        assert_eq!(decision.review_date, None);
    }

    #[test]
    fn test_draw_at_threshold_is_not_approved() {
        let sub = submission(dec!(8000), ClaimType::Property);
        let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.7, 123456), Utc::now()).unwrap();

        assert!(!decision.approved);
        assert_eq!(decision.risk_level, RiskLevel::Medium);
        assert_eq!(decision.payment_status, PaymentStatus::Pending);
        assert_eq!(decision.payment_amount, None);
        assert_eq!(decision.next_steps.len(), 3);
    }

    #[test]
    fn test_approved_and_routed_steps_differ() {
        let sub = submission(dec!(1000), ClaimType::Auto);
        let approved = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.1, 123456), Utc::now()).unwrap();
        let routed = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.9, 123456), Utc::now()).unwrap();

        assert_ne!(approved.next_steps, routed.next_steps);
    }

    #[test]
    fn test_reference_comes_from_entropy() {
        let sub = submission(dec!(1000), ClaimType::Auto);
        let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(0.1, 987654), Utc::now()).unwrap();
        assert_eq!(decision.reference_number, ClaimReference::new(987654).unwrap());
    }

    #[test]
    fn test_payout_rounding() {
        assert_eq!(payout(dec!(1234.56)).unwrap().to_string(), "1049.38");
        assert_eq!(payout(dec!(0)).unwrap().to_string(), "0.00");
    }

    proptest! {
        #[test]
        fn high_risk_is_never_approved(extra in 1i64..1_000_000i64, draw in 0.0f64..1.0) {
            // anything above 15000 as property is high risk
            let amount = dec!(15000) + Decimal::new(extra, 2);
            let now = Utc::now();
            let sub = submission(amount, ClaimType::Property);
            let decision = decide(SubmissionId::new(), &sub, &ScriptedEntropy::new(draw, 100000), now).unwrap();

            prop_assert!(!decision.approved);
            prop_assert_eq!(decision.payment_status, PaymentStatus::Pending);
            prop_assert_eq!(decision.review_date, Some(now + Duration::days(7)));
        }
    }
}
