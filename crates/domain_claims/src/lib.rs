//! Claims Desk Domain
//!
//! This crate implements claim filing, risk classification, approval
//! decisions, and the tracked claim collection.
//!
//! # Claim Flow
//!
//! ```text
//! ClaimForm -> ClaimProcessor::submit -> risk + decision -> Claim -> ClaimStore
//! ```
//!
//! The store persists its whole collection through a `KeyValueStore` port
//! after every change. Randomized decisions draw from an injectable
//! `Entropy` source.

pub mod claim;
pub mod risk;
pub mod decision;
pub mod form;
pub mod processor;
pub mod store;
pub mod samples;
pub mod error;

pub use claim::{Claim, ClaimPatch, ClaimStatus, ClaimSubmission, ClaimType, ContactInfo, PaymentStatus};
pub use risk::{RiskAssessment, RiskLevel};
pub use decision::ClaimDecision;
pub use form::{ClaimForm, FormField, UploadedFile};
pub use processor::{ClaimProcessor, ProcessorConfig, SubmissionOutcome};
pub use store::{ClaimFilter, ClaimStore, ClaimSummary, CLAIMS_KEY};
pub use error::ClaimError;
