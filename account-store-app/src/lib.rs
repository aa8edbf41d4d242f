//! Platform bootstrap for the account store.
//!
//! Provides `AppState` (config + store), `AppStateBuilder` (adapter injection)
//! and the file-backed storage used when no adapter is injected.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use account_store_core::error::StoreResult;
use account_store_core::services::{AccountStore, LoadOutcome};
use account_store_core::traits::KeyValueStorage;

use crate::adapters::FileStorage;
use crate::config::AppConfig;

/// Application state.
///
/// Built once at startup via `AppStateBuilder`; call `initialize` right after
/// building to pull persisted accounts into memory.
pub struct AppState {
    /// Effective configuration
    pub config: AppConfig,
    /// Account store
    pub store: AccountStore,
}

impl AppState {
    /// Load persisted accounts into the store.
    ///
    /// Failures leave the store as it was; they are already logged by the
    /// store and returned here for the caller to act on.
    pub fn initialize(&mut self) -> StoreResult<LoadOutcome> {
        let outcome = self.store.load()?;
        match outcome {
            LoadOutcome::Loaded(count) => {
                log::info!("Account store ready: {count} accounts restored");
            }
            LoadOutcome::Missing => {
                log::info!("Account store ready: no persisted accounts");
            }
        }
        Ok(outcome)
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Optional
/// - `config` — defaults to `AppConfig::default()`
/// - `storage` — defaults to a `FileStorage` at the configured path
#[derive(Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn storage(mut self, storage: Arc<dyn KeyValueStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the `AppState`. Performs no storage I/O.
    ///
    /// # Errors
    /// Returns `StoreError::ValidationError` if no storage is injected and no
    /// storage path can be resolved.
    pub fn build(self) -> StoreResult<AppState> {
        let config = self.config.unwrap_or_default();

        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let path = config.resolve_storage_path()?;
                log::debug!("Using file storage at {}", path.display());
                let mut file_storage = FileStorage::new(path);
                if let Some(quota) = config.quota_bytes {
                    file_storage = file_storage.with_quota(quota);
                }
                Arc::new(file_storage)
            }
        };

        let store = AccountStore::with_key(storage, config.storage_key.clone());
        Ok(AppState { config, store })
    }
}
