//! In-memory key-value storage

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, KeyValueStore, PortError,
};

use crate::error::StorageError;
use crate::validate_key;

/// Process-local key-value store
///
/// Writes can be made to fail on demand, which lets callers exercise their
/// "storage unavailable" paths without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.into(), value.into());
        store
    }

    /// Makes every subsequent write and remove fail until switched back off
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Injected("writes disabled".to_string()));
        }
        Ok(())
    }
}

impl DomainPort for InMemoryKeyValueStore {}

impl KeyValueStore for InMemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, PortError> {
        validate_key(key)?;
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PortError> {
        validate_key(key)?;
        self.check_writable()?;
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortError> {
        validate_key(key)?;
        self.check_writable()?;
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryKeyValueStore {
    async fn health_check(&self) -> HealthCheckResult {
        let (status, message) = if self.fail_writes.load(Ordering::SeqCst) {
            (AdapterHealth::Degraded, Some("writes disabled".to_string()))
        } else {
            (AdapterHealth::Healthy, None)
        };

        HealthCheckResult {
            adapter_id: "memory".to_string(),
            status,
            latency_ms: 0,
            message,
            checked_at: Utc::now(),
        }
    }
}
