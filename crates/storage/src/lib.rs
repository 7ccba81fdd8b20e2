//! Storage abstraction and implementations for Runlog.
//!
//! This crate provides a trait-based storage interface with a JSON file
//! implementation and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
#[cfg(feature = "json")]
pub mod json_storage;
pub mod memory_storage;

pub use trait_::{Storage, StorageError, Result, check_records};
#[cfg(feature = "json")]
pub use json_storage::JsonStorage;
pub use memory_storage::MemoryStorage;
