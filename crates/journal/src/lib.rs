//! Run journal (mutations)
//!
//! Adding and deleting runs as single load-modify-save steps.

#![warn(missing_docs)]

pub mod manager;

pub use manager::{RunJournal, BasicRunJournal, JournalError, Result};
