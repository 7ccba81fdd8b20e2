//! Storage trait abstraction.

use async_trait::async_trait;
use runlog_core::{InvalidRecord, RunId, RunRecord, Username};
use std::collections::HashSet;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record violates the record invariants
    #[error("invalid record {id} for user {user}: {source}")]
    InvalidRecord {
        /// Owner of the record set
        user: Username,
        /// Offending record
        id: RunId,
        /// What was wrong
        #[source]
        source: InvalidRecord,
    },

    /// Two records share an identifier
    #[error("duplicate record id {id} for user {user}")]
    DuplicateId {
        /// Owner of the record set
        user: Username,
        /// Repeated identifier
        id: RunId,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for run records.
///
/// One record set per user. A user with nothing stored has an empty set.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load a user's records in stored order.
    async fn load(&self, user: &Username) -> Result<Vec<RunRecord>>;

    /// Replace a user's records. Either the whole set is written or
    /// nothing changes.
    async fn save(&mut self, user: &Username, records: &[RunRecord]) -> Result<()>;

    /// List users that have stored data.
    async fn list_users(&self) -> Result<Vec<Username>>;
}

/// Validate every record and make sure identifiers are unique.
pub fn check_records(user: &Username, records: &[RunRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate().map_err(|source| StorageError::InvalidRecord {
            user: user.clone(),
            id: record.id,
            source,
        })?;
        if !seen.insert(record.id) {
            return Err(StorageError::DuplicateId {
                user: user.clone(),
                id: record.id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlog_core::NewRun;

    fn user() -> Username {
        Username::new("tester").unwrap()
    }

    fn today() -> runlog_core::Date {
        runlog_core::Date::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_check_records_accepts_valid_set() {
        let records = vec![
            NewRun::new("2024-04-01", 5.0).validate(today()).unwrap(),
            NewRun::new("2024-04-02", 0.0).validate(today()).unwrap(),
        ];
        assert!(check_records(&user(), &records).is_ok());
    }

    #[test]
    fn test_check_records_rejects_duplicates() {
        let record = NewRun::new("2024-04-01", 5.0).validate(today()).unwrap();
        let records = vec![record.clone(), record];
        assert!(matches!(
            check_records(&user(), &records),
            Err(StorageError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_check_records_rejects_negative_distance() {
        let mut record = NewRun::new("2024-04-01", 5.0).validate(today()).unwrap();
        record.distance_km = -2.0;
        assert!(matches!(
            check_records(&user(), &[record]),
            Err(StorageError::InvalidRecord { source: InvalidRecord::NegativeDistance(_), .. })
        ));
    }
}
