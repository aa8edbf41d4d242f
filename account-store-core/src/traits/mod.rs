//! Storage layer abstraction trait definition

mod key_value_storage;

pub use key_value_storage::{InMemoryStorage, KeyValueStorage};
