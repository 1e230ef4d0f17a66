//! File-backed key-value storage
//!
//! Each key maps to `<data_dir>/<key>.json`. Values are written to
//! `<key>.json.tmp` and renamed over the target, which is atomic on the
//! platforms we deploy to.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, KeyValueStore, PortError,
};

use crate::error::StorageError;
use crate::validate_key;

/// Configuration for the file-backed store
///
/// # Example
///
/// ```rust
/// use infra_storage::StorageConfig;
///
/// let config = StorageConfig::new("/var/lib/claims-desk").create_if_missing(false);
/// assert!(!config.create_if_missing);
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one file per key
    pub data_dir: PathBuf,
    /// Whether `open` creates the directory when it does not exist
    pub create_if_missing: bool,
}

impl StorageConfig {
    /// Creates a configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            create_if_missing: true,
        }
    }

    /// Sets whether a missing directory is created on open (default: true)
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

/// Key-value store persisting each value as a JSON file
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store, creating the data directory if configured to
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DirectoryUnavailable` if the directory is
    /// missing (and may not be created) or cannot be created.
    pub fn open(config: StorageConfig) -> Result<Self, StorageError> {
        let path = config.data_dir;

        if config.create_if_missing {
            fs::create_dir_all(&path).map_err(|source| StorageError::DirectoryUnavailable {
                path: path.clone(),
                source,
            })?;
        }

        let metadata = fs::metadata(&path).map_err(|source| StorageError::DirectoryUnavailable {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(StorageError::DirectoryUnavailable {
                path,
                source: std::io::Error::new(ErrorKind::Other, "not a directory"),
            });
        }

        info!(data_dir = %path.display(), "Opened file storage");
        Ok(Self { data_dir: path })
    }

    /// Returns the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{key}.json")))
    }

    fn read_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn write_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))?;

        debug!(key, bytes = value.len(), "Wrote storage value");
        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}

impl DomainPort for FileKeyValueStore {}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.read_value(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PortError> {
        Ok(self.write_value(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), PortError> {
        Ok(self.remove_value(key)?)
    }
}

#[async_trait]
impl HealthCheckable for FileKeyValueStore {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let probe = self.write_value("health-probe", "{}")
            .and_then(|_| self.remove_value("health-probe"));

        let (status, message) = match probe {
            Ok(()) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(e.to_string())),
        };

        HealthCheckResult {
            adapter_id: format!("file:{}", self.data_dir.display()),
            status,
            latency_ms: started.elapsed().as_millis() as u64,
            message,
            checked_at: Utc::now(),
        }
    }
}
