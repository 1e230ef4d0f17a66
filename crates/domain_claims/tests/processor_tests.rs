//! Tests for the claim processing simulator

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::{ScriptedEntropy, SeededEntropy};
use domain_claims::{
    ClaimError, ClaimForm, ClaimProcessor, ClaimStatus, ClaimStore, FormField, PaymentStatus,
    ProcessorConfig, RiskLevel, UploadedFile,
};
use infra_storage::InMemoryKeyValueStore;

fn processor(draw: f64, number: u32) -> ClaimProcessor {
    ClaimProcessor::with_entropy(
        ProcessorConfig::immediate(),
        Arc::new(ScriptedEntropy::new(draw, number)),
    )
}

fn fill(processor: &ClaimProcessor, claim_type: &str, amount: &str) {
    processor.update_field(FormField::PolicyNumber, "POL-2024-001");
    processor.update_field(FormField::ClaimType, claim_type);
    processor.update_field(FormField::IncidentDate, "2024-04-10");
    processor.update_field(FormField::Description, "Hail damage to fleet vehicles");
    processor.update_field(FormField::EstimatedAmount, amount);
    processor.add_files([UploadedFile::new("photos.zip")]);
}

mod form_state_tests {
    use super::*;

    #[test]
    fn test_step_validation() {
        let processor = ClaimProcessor::default();
        assert!(!processor.is_form_valid(1));
        assert!(!processor.is_form_valid(2));
        assert!(!processor.is_form_valid(3));
        // the review step has no requirements
        assert!(processor.is_form_valid(4));

        processor.update_field(FormField::PolicyNumber, "POL-1");
        assert!(!processor.is_form_valid(1));
        processor.update_field(FormField::ClaimType, "auto");
        assert!(processor.is_form_valid(1));

        processor.update_field(FormField::IncidentDate, "2024-04-10");
        processor.update_field(FormField::Description, "Fender bender");
        assert!(!processor.is_form_valid(2));
        processor.update_field(FormField::EstimatedAmount, "1200");
        assert!(processor.is_form_valid(2));

        processor.add_files([UploadedFile::new("quote.pdf")]);
        assert!(processor.is_form_valid(3));
    }

    #[test]
    fn test_update_field_by_client_name() {
        let processor = ClaimProcessor::default();
        processor.update_field_named("policyNumber", "POL-9").unwrap();
        processor.update_field_named("claim_type", "cyber").unwrap();

        let form = processor.form();
        assert_eq!(form.policy_number, "POL-9");
        assert_eq!(form.claim_type, "cyber");

        let err = processor.update_field_named("favouriteColour", "blue").unwrap_err();
        assert!(matches!(err, ClaimError::UnknownField(_)));
    }

    #[test]
    fn test_files_add_and_remove_by_index() {
        let processor = ClaimProcessor::default();
        processor.add_files([UploadedFile::new("a.pdf"), UploadedFile::new("b.pdf")]);
        processor.add_files([UploadedFile::new("c.pdf")]);
        assert_eq!(processor.file_names(), vec!["a.pdf", "b.pdf", "c.pdf"]);

        let removed = processor.remove_file(1);
        assert_eq!(removed.map(|f| f.name), Some("b.pdf".to_string()));
        assert_eq!(processor.file_names(), vec!["a.pdf", "c.pdf"]);

        assert!(processor.remove_file(5).is_none());
        assert_eq!(processor.file_names().len(), 2);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let processor = processor(0.1, 123456);
        fill(&processor, "auto", "1000");
        processor.submit().await.unwrap();
        assert!(processor.last_decision().is_some());

        processor.reset_form();

        assert_eq!(processor.form(), ClaimForm::default());
        assert!(processor.last_decision().is_none());
        assert!(!processor.is_processing());
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_high_risk_submission() {
        let processor = processor(0.0, 482913);
        fill(&processor, "cyber", "20000");
        let before = Utc::now();

        let outcome = processor.submit().await.unwrap();
        let decision = outcome.decision;

        assert!(!decision.approved);
        assert_eq!(decision.risk_level, RiskLevel::High);
        assert_eq!(decision.payment_status, PaymentStatus::Pending);
        assert_eq!(decision.next_steps.len(), 3);
        let review = decision.review_date.unwrap();
        assert_eq!(review, decision.decided_at + chrono::Duration::days(7));
        assert!(review >= before + chrono::Duration::days(7));

        assert_eq!(outcome.claim.reference_number.to_string(), "CLM-482913");
        assert_eq!(outcome.claim.status, ClaimStatus::UnderReview);
        assert_eq!(outcome.claim.documents, Some(vec!["photos.zip".to_string()]));
    }

    #[tokio::test]
    async fn test_low_risk_approved_submission() {
        let processor = processor(0.3, 100000);
        fill(&processor, "auto", "1000");

        let outcome = processor.submit().await.unwrap();

        assert!(outcome.decision.approved);
        assert_eq!(outcome.decision.payment_amount, Some(dec!(850.00)));
        assert_eq!(outcome.claim.status, ClaimStatus::Approved);
        assert_eq!(processor.last_decision(), Some(outcome.decision));
        assert!(!processor.is_processing());
    }

    #[tokio::test]
    async fn test_low_risk_routed_submission() {
        let processor = processor(0.95, 100000);
        fill(&processor, "auto", "1000");

        let outcome = processor.submit().await.unwrap();

        assert!(!outcome.decision.approved);
        assert_eq!(outcome.decision.payment_status, PaymentStatus::Pending);
        assert_eq!(outcome.decision.review_date, None);
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_without_processing() {
        let processor = processor(0.1, 100000);
        processor.update_field(FormField::PolicyNumber, "POL-1");

        let err = processor.submit().await.unwrap_err();

        assert!(matches!(err, ClaimError::IncompleteForm { step: 1 }));
        assert!(err.is_validation());
        assert!(!processor.is_processing());
        assert!(processor.last_decision().is_none());
    }

    #[tokio::test]
    async fn test_unparseable_amount_is_rejected() {
        let processor = processor(0.1, 100000);
        fill(&processor, "auto", "about a grand");

        let err = processor.submit().await.unwrap_err();
        assert!(matches!(err, ClaimError::InvalidAmount(_)));
    }

    #[tokio::test]
    async fn test_amount_too_large_to_assess_is_rejected() {
        let processor = processor(0.1, 100000);
        fill(&processor, "cyber", "79228162514264337593543950335");

        let err = processor.submit().await.unwrap_err();
        assert!(matches!(err, ClaimError::InvalidAmount(_)));
        assert!(err.is_validation());
        assert!(!processor.is_processing());

        // fits once the multiplier is neutral, and is high risk
        processor.update_field(FormField::ClaimType, "property");
        let outcome = processor.submit().await.unwrap();
        assert_eq!(outcome.decision.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_unknown_claim_type_is_rejected() {
        let processor = processor(0.1, 100000);
        fill(&processor, "marine", "1000");

        let err = processor.submit().await.unwrap_err();
        assert!(matches!(err, ClaimError::UnknownClaimType(_)));
    }

    #[tokio::test]
    async fn test_duplicate_submit_is_gated() {
        let processor = ClaimProcessor::with_entropy(
            ProcessorConfig { decision_delay: Duration::from_millis(50) },
            Arc::new(ScriptedEntropy::new(0.1, 100000)),
        );
        fill(&processor, "auto", "1000");

        let (first, second) = tokio::join!(processor.submit(), processor.submit());

        assert!(first.is_ok());
        assert!(matches!(second, Err(ClaimError::SubmissionInProgress)));
        assert!(!processor.is_processing());
    }

    #[tokio::test]
    async fn test_processing_flag_set_while_pending() {
        let processor = Arc::new(ClaimProcessor::with_entropy(
            ProcessorConfig { decision_delay: Duration::from_millis(100) },
            Arc::new(ScriptedEntropy::new(0.1, 100000)),
        ));
        fill(&processor, "auto", "1000");

        let pending = {
            let processor = Arc::clone(&processor);
            tokio::spawn(async move { processor.submit().await })
        };
        while !processor.is_processing() {
            tokio::task::yield_now().await;
        }
        assert!(processor.last_decision().is_none());

        pending.await.unwrap().unwrap();
        assert!(!processor.is_processing());
        assert!(processor.last_decision().is_some());
    }

    #[tokio::test]
    async fn test_reset_while_pending_keeps_new_submission_gated() {
        let processor = Arc::new(ClaimProcessor::with_entropy(
            ProcessorConfig { decision_delay: Duration::from_millis(200) },
            Arc::new(ScriptedEntropy::new(0.1, 100000)),
        ));
        fill(&processor, "auto", "1000");

        let first = {
            let processor = Arc::clone(&processor);
            tokio::spawn(async move { processor.submit().await })
        };
        while !processor.is_processing() {
            tokio::task::yield_now().await;
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
        processor.reset_form();
        assert!(!processor.is_processing());

        fill(&processor, "cyber", "20000");
        let second = {
            let processor = Arc::clone(&processor);
            tokio::spawn(async move { processor.submit().await })
        };
        while !processor.is_processing() {
            tokio::task::yield_now().await;
        }

        // the first decision lands here, while the second is still pending
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(processor.is_processing());
        assert!(processor.last_decision().is_none());
        assert!(matches!(processor.submit().await, Err(ClaimError::SubmissionInProgress)));

        // the stale caller still gets its own outcome
        let stale = first.await.unwrap().unwrap();
        assert!(stale.decision.approved);

        let current = second.await.unwrap().unwrap();
        assert_eq!(current.decision.risk_level, RiskLevel::High);
        assert!(!processor.is_processing());
        assert_eq!(processor.last_decision(), Some(current.decision));
    }

    #[tokio::test]
    async fn test_dropped_submit_still_resolves() {
        let processor = ClaimProcessor::with_entropy(
            ProcessorConfig { decision_delay: Duration::from_millis(20) },
            Arc::new(ScriptedEntropy::new(0.1, 100000)),
        );
        fill(&processor, "auto", "1000");

        // poll once so the decision task is spawned, then give up on it
        let _ = tokio::time::timeout(Duration::from_millis(1), processor.submit()).await;
        assert!(processor.is_processing());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!processor.is_processing());
        assert!(processor.last_decision().is_some());
    }

    #[tokio::test]
    async fn test_independent_processors_submit_concurrently() {
        let a = processor(0.1, 111111);
        let b = processor(0.1, 222222);
        fill(&a, "auto", "1000");
        fill(&b, "cyber", "20000");

        let (ra, rb) = tokio::join!(a.submit(), b.submit());

        assert!(ra.unwrap().decision.approved);
        assert!(!rb.unwrap().decision.approved);
    }

    #[tokio::test]
    async fn test_outcome_flows_into_store() {
        let processor = processor(0.1, 313131);
        fill(&processor, "property", "4000");
        let mut store = ClaimStore::load(Arc::new(InMemoryKeyValueStore::new()));
        let before = store.len();

        let outcome = processor.submit().await.unwrap();
        let reference = outcome.claim.reference_number;
        store.add_claim(outcome.claim.clone());

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.get_claim(&reference), Some(&outcome.claim));
    }

    #[tokio::test]
    async fn test_seeded_entropy_gives_valid_references() {
        let processor = ClaimProcessor::with_entropy(
            ProcessorConfig::immediate(),
            Arc::new(SeededEntropy::new(7)),
        );
        fill(&processor, "liability", "3000");

        for _ in 0..20 {
            let outcome = processor.submit().await.unwrap();
            let rendered = outcome.decision.reference_number.to_string();
            assert_eq!(rendered.len(), 10);
            assert!(rendered.starts_with("CLM-"));
        }
    }
}
