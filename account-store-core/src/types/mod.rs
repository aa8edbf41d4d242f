//! Type definition module

mod account;

pub use account::{Account, AccountType, TagItem, TypeOptions};
