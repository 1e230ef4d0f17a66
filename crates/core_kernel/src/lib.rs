//! Core Kernel - Foundational types and utilities for the claims desk
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers, including the `CLM-######` claim reference
//! - Injectable entropy sources for randomized business decisions
//! - Port traits for durable key-value storage

pub mod identifiers;
pub mod entropy;
pub mod ports;
pub mod error;

pub use identifiers::{ClaimReference, ReferenceError, SubmissionId, AgentId};
pub use entropy::{Entropy, ThreadEntropy, SeededEntropy, ScriptedEntropy};
pub use ports::{
    PortError, DomainPort, KeyValueStore,
    AdapterHealth, HealthCheckResult, HealthCheckable,
};
pub use error::CoreError;
