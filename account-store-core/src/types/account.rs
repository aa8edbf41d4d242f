//! Account type definitions

use serde::{Deserialize, Serialize};

/// Account kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Directory-backed account
    #[serde(rename = "LDAP")]
    Ldap,
    /// Locally managed account
    #[serde(rename = "Local")]
    Local,
}

impl AccountType {
    /// All account types, in display order
    pub const ALL: [Self; 2] = [Self::Ldap, Self::Local];

    /// Wire representation (`"LDAP"` / `"Local"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ldap => "LDAP",
            Self::Local => "Local",
        }
    }

    /// Display options for a type picker
    #[must_use]
    pub fn options() -> Vec<TypeOptions> {
        Self::ALL
            .iter()
            .map(|t| TypeOptions {
                title: t.as_str().to_string(),
                value: t.as_str().to_string(),
            })
            .collect()
    }
}

/// Single tag attached to an account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagItem {
    pub text: String,
}

impl TagItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Account record
///
/// `tags` and `tags_raw` are independent; nothing keeps them in sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Account ID, assigned by the caller
    pub id: String,
    /// Parsed tags
    pub tags: Vec<TagItem>,
    /// Tags as typed by the user
    #[serde(rename = "tagsRaw")]
    pub tags_raw: String,
    /// Account kind
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Login name
    pub login: String,
    /// Password, stored as-is (`null` when absent)
    pub password: Option<String>,
}

/// Title/value pair used to render account type choices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeOptions {
    pub title: String,
    pub value: String,
}
