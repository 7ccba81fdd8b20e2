//! In-memory storage, used for tests and dry runs.

use std::collections::HashMap;
use runlog_core::{RunRecord, Username};
use super::{check_records, Result, Storage};

/// Storage backend that keeps record sets in a map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    runs: HashMap<Username, Vec<RunRecord>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn load(&self, user: &Username) -> Result<Vec<RunRecord>> {
        Ok(self.runs.get(user).cloned().unwrap_or_default())
    }

    async fn save(&mut self, user: &Username, records: &[RunRecord]) -> Result<()> {
        check_records(user, records)?;
        self.runs.insert(user.clone(), records.to_vec());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<Username>> {
        let mut users: Vec<_> = self.runs.keys().cloned().collect();
        users.sort();
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlog_core::{Date, NewRun};

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let mut storage = MemoryStorage::new();
        let user = Username::new("anna").unwrap();
        let today = Date::from_ymd_opt(2024, 5, 1).unwrap();
        let run = NewRun::new("2024-04-01", 4.0).validate(today).unwrap();

        assert!(storage.load(&user).await.unwrap().is_empty());
        storage.save(&user, &[run.clone()]).await.unwrap();
        assert_eq!(storage.load(&user).await.unwrap(), vec![run]);
        assert_eq!(storage.list_users().await.unwrap(), vec![user]);
    }
}
