//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the claims desk.
//! These fixtures are designed to be consistent and predictable for unit tests.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimReference, Entropy, ScriptedEntropy};
use domain_claims::ContactInfo;
use domain_party::AgentProfile;

/// Fixture for claim amounts around the risk thresholds
pub struct AmountFixtures;

impl AmountFixtures {
    /// Comfortably low risk for any claim type
    pub fn small() -> Decimal {
        dec!(1000)
    }

    /// Exactly on the medium threshold
    pub fn medium_threshold() -> Decimal {
        dec!(5000)
    }

    /// Exactly on the high threshold
    pub fn high_threshold() -> Decimal {
        dec!(15000)
    }

    /// High risk for any claim type
    pub fn large() -> Decimal {
        dec!(20000)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard submission time (Mar 4, 2024 10:00 UTC)
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
    }

    /// Incident a few days before submission
    pub fn incident_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Incident date as the form expects it
    pub fn incident_date_input() -> &'static str {
        "2024-03-01"
    }
}

/// Fixture for identifiers and text
pub struct StringFixtures;

impl StringFixtures {
    pub fn policy_number() -> &'static str {
        "POL-2024-101"
    }

    pub fn reference() -> ClaimReference {
        ClaimReference::new(555_123).unwrap()
    }

    pub fn description() -> &'static str {
        "Storm damage to storefront windows"
    }

    pub fn contact() -> ContactInfo {
        ContactInfo {
            name: "Avery Holt".to_string(),
            email: "avery.holt@example.com".to_string(),
            phone: "555-0101".to_string(),
        }
    }

    pub fn agent() -> AgentProfile {
        AgentProfile::new("Sarah Chen", "Senior Claims Adjuster").unwrap()
    }
}

/// Fixture for deterministic randomness
pub struct EntropyFixtures;

impl EntropyFixtures {
    /// Approval draw that approves anything below high risk
    pub fn approving(reference: u32) -> Arc<dyn Entropy> {
        Arc::new(ScriptedEntropy::new(0.1, reference))
    }

    /// Approval draw that routes everything to an adjuster
    pub fn declining(reference: u32) -> Arc<dyn Entropy> {
        Arc::new(ScriptedEntropy::new(0.99, reference))
    }
}
