//! Runlog core data models.
//!
//! This crate defines the run records, user identities and goal
//! configuration shared by the storage, progress and journal crates.
//! Nothing in here performs I/O.

#![warn(missing_docs)]

// Identities
mod id;

// Run entries
mod run;

// Goals and achievements
mod config;

// Re-exports
pub use id::{RunId, Username, InvalidUsername};
pub use run::{RunRecord, NewRun, InvalidRecord, parse_date, DATE_FORMAT};
pub use config::{
    GoalConfig, Achievement, ConfigError,
    DEFAULT_OVERALL_GOAL_KM, DEFAULT_WEEKLY_GOAL_KM, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Calendar date type used for run dates.
pub type Date = chrono::NaiveDate;
