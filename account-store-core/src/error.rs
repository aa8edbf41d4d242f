//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Account store error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StoreError {
    /// Persisted value exists but is not a valid account list
    #[error("Failed to parse persisted accounts: {0}")]
    ParseFailure(String),

    /// Persisting the account list was rejected
    #[error("Failed to write accounts: {0}")]
    WriteFailure(String),

    /// Storage backend error (read failure, quota, io)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Store layer Result type alias
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_code_tag() {
        let err = StoreError::WriteFailure("quota exceeded".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"WriteFailure","details":"quota exceeded"}"#);
    }

    #[test]
    fn display_includes_details() {
        let err = StoreError::ParseFailure("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to parse persisted accounts: expected value at line 1"
        );
    }
}
