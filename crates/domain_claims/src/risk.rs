//! Claim risk classification
//!
//! Risk is a coarse tier derived from the claimed amount, scaled by a fixed
//! per-line-of-business multiplier:
//!
//! | Claim type    | Multiplier |
//! |---------------|------------|
//! | cyber         | 1.5        |
//! | professional  | 1.3        |
//! | liability     | 1.2        |
//! | workers_comp  | 1.1        |
//! | property      | 1.0        |
//! | auto          | 0.9        |
//!
//! An adjusted amount strictly above 15,000 is high risk, strictly above
//! 5,000 is medium, anything else is low. An unknown or missing claim type
//! uses a multiplier of 1.0. Amounts whose adjusted value does not fit in a
//! `Decimal` cannot be classified.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::claim::ClaimType;
use crate::error::ClaimError;

/// Adjusted amount above which a claim is high risk
pub const HIGH_RISK_THRESHOLD: Decimal = dec!(15000);
/// Adjusted amount above which a claim is medium risk
pub const MEDIUM_RISK_THRESHOLD: Decimal = dec!(5000);

/// Coarse severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Multiplier applied to the claimed amount for a claim type
pub fn multiplier(claim_type: Option<ClaimType>) -> Decimal {
    match claim_type {
        Some(ClaimType::Cyber) => dec!(1.5),
        Some(ClaimType::Professional) => dec!(1.3),
        Some(ClaimType::Liability) => dec!(1.2),
        Some(ClaimType::WorkersComp) => dec!(1.1),
        Some(ClaimType::Property) => dec!(1.0),
        Some(ClaimType::Auto) => dec!(0.9),
        None => dec!(1.0),
    }
}

/// Outcome of a risk classification, with the numbers that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub amount: Decimal,
    pub multiplier: Decimal,
    pub adjusted_amount: Decimal,
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Classifies a claim
    ///
    /// Pure: identical inputs always give the identical tier.
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidAmount` if the adjusted amount overflows.
    pub fn assess(amount: Decimal, claim_type: Option<ClaimType>) -> Result<Self, ClaimError> {
        let multiplier = multiplier(claim_type);
        let adjusted_amount = amount
            .checked_mul(multiplier)
            .ok_or_else(|| ClaimError::InvalidAmount(amount.to_string()))?;

        let level = if adjusted_amount > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if adjusted_amount > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        Ok(Self {
            amount,
            multiplier,
            adjusted_amount,
            level,
        })
    }

    /// Classifies a claim whose type arrives as free text
    ///
    /// Unrecognized type names fall back to the neutral multiplier.
    pub fn assess_raw(amount: Decimal, claim_type: &str) -> Result<Self, ClaimError> {
        Self::assess(amount, claim_type.parse().ok())
    }
}

/// Shorthand for `RiskAssessment::assess(..).level`
pub fn classify(amount: Decimal, claim_type: Option<ClaimType>) -> Result<RiskLevel, ClaimError> {
    Ok(RiskAssessment::assess(amount, claim_type)?.level)
}
