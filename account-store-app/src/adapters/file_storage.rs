//! JSON file key/value storage.
//!
//! The whole file is one JSON object mapping keys to string values, the
//! on-disk counterpart of browser local storage. Writes replace the file
//! atomically (temp file + rename).

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use account_store_core::error::{StoreError, StoreResult};
use account_store_core::traits::KeyValueStorage;

const APP_DIR_NAME: &str = "account-store";
const STORE_FILE_NAME: &str = "storage.json";

type Entries = BTreeMap<String, String>;

/// File-backed key/value storage
pub struct FileStorage {
    path: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota_bytes: None,
        }
    }

    /// Reject values longer than `bytes`
    #[must_use]
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    /// `<data dir>/account-store/storage.json`, if the platform has a data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file: the full file name plus `.tmp`
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_entries(&self) -> StoreResult<Entries> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(StoreError::StorageError(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StoreError::StorageError(format!("Corrupt storage file {}: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &Entries) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::StorageError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::StorageError(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| {
            StoreError::StorageError(format!("Failed to write {}: {e}", tmp_path.display()))
        })?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup_err) = fs::remove_file(&tmp_path) {
                log::warn!("Cleanup: failed to remove {}: {cleanup_err}", tmp_path.display());
            }
            return Err(StoreError::StorageError(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            )));
        }

        log::debug!("Wrote {} keys to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
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

        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}
