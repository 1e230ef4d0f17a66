//! Claim store
//!
//! An ordered in-memory collection of claims that mirrors itself to durable
//! key-value storage. The whole collection is serialized under
//! [`CLAIMS_KEY`] after every mutation; there is no partial write and no
//! conflict detection, so the last writer wins.
//!
//! On load the persisted claims are followed by the built-in sample set.
//! Samples are appended unconditionally, so a store that is persisted and
//! reloaded carries one more copy of each sample per reload.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{ClaimReference, KeyValueStore};
use crate::claim::{Claim, ClaimPatch, ClaimStatus, PaymentStatus};
use crate::risk::RiskLevel;
use crate::samples::sample_claims;

/// Storage key holding the serialized claim collection
pub const CLAIMS_KEY: &str = "claims";

/// Criteria for listing claims; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimFilter {
    #[serde(default)]
    pub status: Option<ClaimStatus>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    /// Exact policy number
    #[serde(default)]
    pub policy_number: Option<String>,
}

impl ClaimFilter {
    pub fn matches(&self, claim: &Claim) -> bool {
        self.status.map_or(true, |s| claim.status == s)
            && self.payment_status.map_or(true, |s| claim.payment_status == s)
            && self.risk_level.map_or(true, |r| claim.risk_level == r)
            && self
                .policy_number
                .as_deref()
                .map_or(true, |p| claim.policy_number == p)
    }
}

/// Dashboard overview of the claim collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub total_claims: usize,
    /// Claims that are submitted, under review, or waiting on information
    pub open_claims: usize,
    pub by_status: BTreeMap<ClaimStatus, usize>,
    pub by_risk_level: BTreeMap<RiskLevel, usize>,
    /// Sum of claimed amounts
    pub total_claimed: Decimal,
    /// Sum of payment amounts that are paid or being processed
    pub total_disbursed: Decimal,
}

/// In-memory claim collection backed by a storage port
pub struct ClaimStore {
    claims: Vec<Claim>,
    storage: Arc<dyn KeyValueStore>,
}

impl ClaimStore {
    /// Loads the persisted collection and appends the sample claims
    ///
    /// A missing, unreadable, or malformed blob is treated as an empty
    /// collection.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut claims = read_persisted(storage.as_ref());
        let persisted = claims.len();
        claims.extend(sample_claims());

        debug!(persisted, total = claims.len(), "Claim store loaded");
        Self { claims, storage }
    }

    /// Creates a store holding exactly `claims`, without reading storage
    pub fn with_claims(storage: Arc<dyn KeyValueStore>, claims: Vec<Claim>) -> Self {
        Self { claims, storage }
    }

    /// Appends a claim
    ///
    /// Reference numbers are not checked for uniqueness; callers that
    /// generate references should check `get_claim` first.
    pub fn add_claim(&mut self, claim: Claim) {
        debug!(reference_number = %claim.reference_number, "Adding claim");
        self.claims.push(claim);
        self.persist();
    }

    /// Merges `patch` into the first claim with this reference
    ///
    /// Returns false, without touching storage, if no claim matches.
    pub fn update_claim(&mut self, reference: &ClaimReference, patch: ClaimPatch) -> bool {
        let Some(claim) = self.claims.iter_mut().find(|c| c.reference_number == *reference) else {
            debug!(reference_number = %reference, "Update skipped, claim not found");
            return false;
        };

        claim.apply(patch);
        debug!(reference_number = %reference, "Claim updated");
        self.persist();
        true
    }

    /// First claim with this reference
    pub fn get_claim(&self, reference: &ClaimReference) -> Option<&Claim> {
        self.claims.iter().find(|c| c.reference_number == *reference)
    }

    /// Removes every claim with this reference, returning how many were removed
    pub fn delete_claim(&mut self, reference: &ClaimReference) -> usize {
        let before = self.claims.len();
        self.claims.retain(|c| c.reference_number != *reference);
        let removed = before - self.claims.len();

        debug!(reference_number = %reference, removed, "Claims deleted");
        self.persist();
        removed
    }

    /// All claims in insertion order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Claims matching `filter`, in insertion order
    pub fn filter(&self, filter: &ClaimFilter) -> Vec<&Claim> {
        self.claims.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Counts and totals for the dashboard overview
    pub fn summary(&self) -> ClaimSummary {
        let mut summary = ClaimSummary {
            total_claims: self.claims.len(),
            ..Default::default()
        };

        for claim in &self.claims {
            *summary.by_status.entry(claim.status).or_default() += 1;
            *summary.by_risk_level.entry(claim.risk_level).or_default() += 1;
            if claim.status.is_open() {
                summary.open_claims += 1;
            }
            // Totals saturate instead of overflowing
            summary.total_claimed = summary.total_claimed.saturating_add(claim.amount);
            if matches!(claim.payment_status, PaymentStatus::Paid | PaymentStatus::Processing) {
                summary.total_disbursed = summary
                    .total_disbursed
                    .saturating_add(claim.payment_amount.unwrap_or_default());
            }
        }

        summary
    }

    /// Checks whether a reference is already taken
    pub fn contains(&self, reference: &ClaimReference) -> bool {
        self.get_claim(reference).is_some()
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.claims) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to serialize claims, storage not updated");
                return;
            }
        };

        if let Err(e) = self.storage.write(CLAIMS_KEY, &serialized) {
            warn!(error = %e, key = CLAIMS_KEY, "Failed to persist claims");
        }
    }
}

fn read_persisted(storage: &dyn KeyValueStore) -> Vec<Claim> {
    let raw = match storage.read(CLAIMS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, key = CLAIMS_KEY, "Failed to read persisted claims");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(error = %e, key = CLAIMS_KEY, "Ignoring malformed persisted claims");
        Vec::new()
    })
}
