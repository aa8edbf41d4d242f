//! Test helper module
//!
//! Provides a mock storage and convenient test factory methods.
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};
use crate::services::AccountStore;
use crate::traits::KeyValueStorage;
use crate::types::{Account, AccountType, TagItem};

// ===== MockStorage =====

pub struct MockStorage {
    entries: Mutex<HashMap<String, String>>,
    /// If Some, `get` returns this error
    get_error: Mutex<Option<String>>,
    /// If Some, `set` returns this error
    set_error: Mutex<Option<String>>,
    /// Every successful `set` value, in order
    writes: Mutex<Vec<String>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            get_error: Mutex::new(None),
            set_error: Mutex::new(None),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Storage pre-populated with a raw value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn set_get_error(&self, err: Option<&str>) {
        *self.get_error.lock().unwrap() = err.map(str::to_string);
    }

    pub fn set_set_error(&self, err: Option<&str>) {
        *self.set_error.lock().unwrap() = err.map(str::to_string);
    }

    /// Put a raw value directly, bypassing the write log
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl KeyValueStorage for MockStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if let Some(ref msg) = *self.get_error.lock().unwrap() {
            return Err(StoreError::StorageError(msg.clone()));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(ref msg) = *self.set_error.lock().unwrap() {
            return Err(StoreError::StorageError(msg.clone()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.writes.lock().unwrap().push(value.to_string());
        Ok(())
    }
}

// ===== Factories =====

pub fn make_account(id: &str, login: &str) -> Account {
    Account {
        id: id.to_string(),
        tags: vec![TagItem::new("work")],
        tags_raw: "work".to_string(),
        account_type: AccountType::Local,
        login: login.to_string(),
        password: Some(format!("{login}-secret")),
    }
}

/// Store over a fresh `MockStorage`, not yet loaded
pub fn create_test_store() -> (AccountStore, Arc<MockStorage>) {
    create_test_store_with(MockStorage::new())
}

pub fn create_test_store_with(storage: MockStorage) -> (AccountStore, Arc<MockStorage>) {
    let storage = Arc::new(storage);
    let store = AccountStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStorage>);
    (store, storage)
}
