//! Account Store Core Library
//!
//! Keeps an ordered list of accounts in memory and mirrors it, as one JSON
//! array, into a single slot of a key/value storage facility.
//!
//! The storage facility is abstracted through the `KeyValueStorage` trait so
//! hosts can plug in browser-like storage, a file, or an in-memory fake.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{StoreError, StoreResult};
pub use services::{AccountStore, LoadOutcome, DEFAULT_STORAGE_KEY};
pub use traits::{InMemoryStorage, KeyValueStorage};
pub use types::{Account, AccountType, TagItem, TypeOptions};
