//! Application configuration

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use account_store_core::error::{StoreError, StoreResult};
use account_store_core::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

use crate::adapters::FileStorage;

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Application configuration, stored as camelCase JSON
///
/// Every field has a default, so a missing or partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Storage slot holding the account list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Storage file; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,

    /// Maximum size of a stored value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_path: None,
            quota_bytes: None,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> StoreResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(StoreError::ConfigError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| StoreError::ConfigError(format!("Invalid config {}: {e}", path.display())))
    }

    /// Write as pretty JSON
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::ConfigError(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::ConfigError(format!("Failed to create {}: {e}", parent.display())))?;
        }
        fs::write(path, json)
            .map_err(|e| StoreError::ConfigError(format!("Failed to write {}: {e}", path.display())))
    }

    /// Configured storage path, falling back to the platform default
    pub fn resolve_storage_path(&self) -> StoreResult<PathBuf> {
        self.storage_path
            .clone()
            .or_else(FileStorage::default_path)
            .ok_or_else(|| {
                StoreError::ValidationError(
                    "storage_path is required on platforms without a data dir".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"quotaBytes":1024}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.storage_path, None);
        assert_eq!(config.quota_bytes, Some(1024));
    }

    #[test]
    fn explicit_storage_path_wins() {
        let config = AppConfig {
            storage_path: Some(PathBuf::from("/data/accounts.json")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolve_storage_path().unwrap(),
            PathBuf::from("/data/accounts.json")
        );
    }

    #[test]
    fn default_config_omits_unset_fields() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert_eq!(json, r#"{"storageKey":"accounts_store_v1"}"#);
    }
}
