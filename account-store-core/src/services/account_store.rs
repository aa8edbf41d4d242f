//! Account store service
//!
//! Keeps the account list in memory and rewrites the whole list into one
//! storage slot after every mutation. Persistence failures are logged and
//! returned, but never roll back the in-memory change.

use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyValueStorage;
use crate::types::Account;

/// Default storage slot; the version marker lives in the key name.
pub const DEFAULT_STORAGE_KEY: &str = "accounts_store_v1";

/// Result of a successful `load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Slot absent or empty, in-memory list untouched
    Missing,
    /// In-memory list replaced by this many persisted accounts
    Loaded(usize),
}

/// Account store
pub struct AccountStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create an empty store over the default slot. Performs no I/O.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create an empty store over a custom slot. Performs no I/O.
    #[must_use]
    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            accounts: Vec::new(),
        }
    }

    /// Storage slot key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    // ===== Persistence =====

    /// Replace the in-memory list with the persisted one
    ///
    /// An absent or empty slot leaves the list as it is. On any failure the
    /// list is left as it is and the error is logged before being returned.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Failed to load accounts: {e}");
                return Err(e);
            }
        };

        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            log::debug!("No persisted accounts under {}", self.key);
            return Ok(LoadOutcome::Missing);
        };

        match serde_json::from_str::<Vec<Account>>(&raw) {
            Ok(accounts) => {
                let count = accounts.len();
                self.accounts = accounts;
                log::info!("Loaded {count} accounts from {}", self.key);
                Ok(LoadOutcome::Loaded(count))
            }
            Err(e) => {
                let err = StoreError::ParseFailure(e.to_string());
                log::error!("Failed to load accounts: {err}");
                Err(err)
            }
        }
    }

    /// Overwrite the slot with the full in-memory list
    pub fn save(&self) -> StoreResult<()> {
        let result = serde_json::to_string(&self.accounts)
            .map_err(|e| StoreError::WriteFailure(e.to_string()))
            .and_then(|json| {
                self.storage
                    .set(&self.key, &json)
                    .map_err(|e| StoreError::WriteFailure(e.to_string()))
            });

        match result {
            Ok(()) => {
                log::debug!("Saved {} accounts to {}", self.accounts.len(), self.key);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save accounts: {e}");
                Err(e)
            }
        }
    }

    // ===== CRUD operations =====

    /// Append an account and persist
    ///
    /// The account is kept in memory even if persisting fails.
    pub fn add(&mut self, account: Account) -> StoreResult<()> {
        self.accounts.push(account);
        self.save()
    }

    /// Replace the first account with the same id and persist
    ///
    /// Returns `Ok(false)` without touching storage when no account matches.
    pub fn update(&mut self, updated: Account) -> StoreResult<bool> {
        let Some(pos) = self.accounts.iter().position(|a| a.id == updated.id) else {
            return Ok(false);
        };
        self.accounts[pos] = updated;
        self.save()?;
        Ok(true)
    }

    /// Remove every account with `id` and persist
    ///
    /// Persists even when nothing matched. Returns the number removed.
    pub fn remove(&mut self, id: &str) -> StoreResult<usize> {
        let initial_len = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        let removed = initial_len - self.accounts.len();
        self.save()?;
        Ok(removed)
    }
}
