//! Strongly-typed identifiers for domain entities
//!
//! Internal identifiers are newtype wrappers around UUIDs, which prevents
//! accidental mixing of different identifier types. Claims additionally carry
//! a short human-readable reference number (`CLM-######`) that agents quote
//! to policyholders.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::entropy::Entropy;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

// One per claim-form submission, used to correlate log lines
define_id!(SubmissionId, "SUB");

// Party domain identifiers
define_id!(AgentId, "AGT");

/// Errors raised when parsing or building a claim reference
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Claim reference must start with CLM-: {0}")]
    MissingPrefix(String),

    #[error("Claim reference must end in exactly 6 digits: {0}")]
    InvalidDigits(String),

    #[error("Claim reference number {0} is outside 100000..=999999")]
    OutOfRange(u32),
}

/// Human-readable claim reference, `CLM-` followed by six digits
///
/// The numeric part always lies in `100000..=999999`, so the rendered form
/// never needs zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClaimReference(u32);

impl ClaimReference {
    pub const PREFIX: &'static str = "CLM";
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;
    /// Lowest valid reference, `CLM-100000`
    pub const FIRST: ClaimReference = ClaimReference(Self::MIN);

    /// Builds a reference from its numeric part
    pub fn new(number: u32) -> Result<Self, ReferenceError> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(ReferenceError::OutOfRange(number));
        }
        Ok(Self(number))
    }

    /// Draws a fresh reference number from the entropy source
    ///
    /// Uniqueness is not checked here; collisions are the store owner's concern.
    pub fn generate(entropy: &dyn Entropy) -> Self {
        let number = entropy.next_in_range(Self::MIN, Self::MAX);
        Self(number.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the numeric part
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClaimReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ClaimReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("CLM-")
            .ok_or_else(|| ReferenceError::MissingPrefix(s.to_string()))?;

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReferenceError::InvalidDigits(s.to_string()));
        }

        let number: u32 = digits
            .parse()
            .map_err(|_| ReferenceError::InvalidDigits(s.to_string()))?;
        Self::new(number)
    }
}

impl Serialize for ClaimReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClaimReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
