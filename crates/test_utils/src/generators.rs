//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ClaimReference;
use domain_claims::{Claim, ClaimStatus, ClaimType};

use crate::builders::TestClaimBuilder;

/// Strategy for generating every claim type
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    proptest::sample::select(ClaimType::ALL.to_vec())
}

/// Strategy for generating every claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::UnderReview),
        Just(ClaimStatus::AdditionalInfo),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Denied),
        Just(ClaimStatus::Paid),
    ]
}

/// Strategy for generating claim amounts with two decimal places (0.01 to 1,000,000.00)
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating valid reference numbers
pub fn reference_strategy() -> impl Strategy<Value = ClaimReference> {
    (ClaimReference::MIN..=ClaimReference::MAX)
        .prop_map(|n| ClaimReference::new(n).expect("number in range"))
}

/// Strategy for generating approval draws in [0, 1)
pub fn unit_draw_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1.0f64
}

/// Strategy for generating tracked claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        ClaimReference::MIN..=ClaimReference::MAX,
        claim_type_strategy(),
        claim_amount_strategy(),
        claim_status_strategy(),
    )
        .prop_map(|(number, claim_type, amount, status)| {
            TestClaimBuilder::new()
                .with_reference(number)
                .with_type_and_amount(claim_type, amount)
                .with_status(status)
                .build()
        })
}
