//! Infrastructure Storage Layer
//!
//! This crate provides the durable key-value adapters behind the
//! `core_kernel::KeyValueStore` port.
//!
//! # Adapters
//!
//! - **File**: one JSON document per key inside a data directory. Writes go to
//!   a temporary sibling file first and are renamed into place, so a reader
//!   of a key never observes a half-written value for that key. The health
//!   probe writes its own key and leaves other keys untouched.
//! - **Memory**: a process-local map, with optional failure injection for
//!   exercising error paths in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_storage::{FileKeyValueStore, StorageConfig};
//!
//! let storage = FileKeyValueStore::open(StorageConfig::new("./data"))?;
//! storage.write("claims", "[]")?;
//! ```

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::{FileKeyValueStore, StorageConfig};
pub use memory::InMemoryKeyValueStore;

/// Checks that a key is safe to use as a file stem
///
/// Keys are limited to ASCII letters, digits, `-` and `_`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
