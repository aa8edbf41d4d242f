//! Key/value storage abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};

/// Persistent key/value storage Trait
///
/// Values are opaque strings stored under string keys, the same contract as
/// browser local storage.
///
/// Platform implementation:
/// - Desktop: `FileStorage` (JSON file, `account-store-app`)
/// - Tests / hosts without persistence: `InMemoryStorage`
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key present
    /// * `Ok(None)` - key absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// On error the previous value must be left in place.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory key/value storage
///
/// Default implementation, available on all platforms. Clones share the same
/// underlying map.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl InMemoryStorage {
    /// Create an empty, unbounded storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values longer than `bytes`
    #[must_use]
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::StorageError(format!("Storage lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(StoreError::StorageError(format!(
                    "quota exceeded: {} bytes > {quota} bytes",
                    value.len()
                )));
            }
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::StorageError(format!("Storage lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
