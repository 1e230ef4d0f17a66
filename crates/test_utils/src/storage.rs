//! Throwaway storage backends

use std::sync::Arc;

use tempfile::TempDir;

use domain_claims::{Claim, CLAIMS_KEY};
use infra_storage::{FileKeyValueStore, InMemoryKeyValueStore, StorageConfig};

/// A file store rooted in a temporary directory
///
/// The directory is removed when this value is dropped, so keep it alive for
/// as long as the store is in use.
pub struct TempFileStore {
    pub dir: TempDir,
    pub store: Arc<FileKeyValueStore>,
}

impl TempFileStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileKeyValueStore::open(StorageConfig::new(dir.path())).expect("open file store");
        Self {
            dir,
            store: Arc::new(store),
        }
    }

    /// Reopens the same directory, as a restarted process would
    pub fn reopen(&self) -> Arc<FileKeyValueStore> {
        Arc::new(FileKeyValueStore::open(StorageConfig::new(self.dir.path())).expect("reopen file store"))
    }
}

impl Default for TempFileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory storage already holding `claims` under the claims key
pub fn memory_store_with(claims: &[Claim]) -> Arc<InMemoryKeyValueStore> {
    let blob = serde_json::to_string(claims).expect("serialize claims");
    Arc::new(InMemoryKeyValueStore::with_value(CLAIMS_KEY, blob))
}
