//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims desk test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for claims and claim forms
//! - `storage`: Throwaway storage backends for store and API tests
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod storage;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use storage::*;
pub use assertions::*;
pub use generators::*;
