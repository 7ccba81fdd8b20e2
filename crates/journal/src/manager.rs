//! Run journal service.

use std::sync::Arc;
use async_trait::async_trait;
use runlog_core::{Date, InvalidRecord, NewRun, RunId, RunRecord, Username};
use runlog_storage::{Storage, StorageError};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Result type for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Errors from journal operations.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// Input rejected before touching storage
    #[error("invalid run: {0}")]
    InvalidRecord(#[from] InvalidRecord),

    /// No run with this identifier
    #[error("no run with id {0}")]
    NotFound(RunId),

    /// Storage failed; the stored record set is unchanged
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Mutations on a user's run log.
#[async_trait]
pub trait RunJournal: Send + Sync {
    /// Validate and append a run.
    async fn add_run(&self, user: &Username, input: NewRun) -> Result<RunRecord>;

    /// Remove a run by identifier and return it.
    async fn delete_run(&self, user: &Username, id: RunId) -> Result<RunRecord>;

    /// All runs sorted by date; same-day runs keep the order they were logged in.
    async fn runs(&self, user: &Username) -> Result<Vec<RunRecord>>;
}

/// Journal over any [`Storage`].
///
/// Each mutation holds the storage lock from load to save, and the new
/// record set only exists locally until `save` succeeds, so a failed
/// save leaves both storage and later reads unchanged.
pub struct BasicRunJournal<S: Storage> {
    storage: Arc<Mutex<S>>,
    today: Option<Date>,
}

impl<S: Storage> BasicRunJournal<S> {
    /// Create a new journal.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
            today: None,
        }
    }

    /// Fix the date used for runs submitted without one.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Shared handle to the underlying storage.
    pub fn storage(&self) -> Arc<Mutex<S>> {
        self.storage.clone()
    }

    fn today(&self) -> Date {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[async_trait]
impl<S: Storage + 'static> RunJournal for BasicRunJournal<S> {
    async fn add_run(&self, user: &Username, input: NewRun) -> Result<RunRecord> {
        let record = input.validate(self.today())?;

        let mut storage = self.storage.lock().await;
        let mut records = storage.load(user).await?;
        records.push(record.clone());

        if let Err(e) = storage.save(user, &records).await {
            warn!(%user, id = %record.id, error = %e, "failed to save new run");
            return Err(e.into());
        }

        info!(%user, id = %record.id, date = %record.date, km = record.distance_km, "run added");
        Ok(record)
    }

    async fn delete_run(&self, user: &Username, id: RunId) -> Result<RunRecord> {
        let mut storage = self.storage.lock().await;
        let mut records = storage.load(user).await?;

        let Some(index) = records.iter().position(|r| r.id == id) else {
            return Err(JournalError::NotFound(id));
        };
        let removed = records.remove(index);

        if let Err(e) = storage.save(user, &records).await {
            warn!(%user, %id, error = %e, "failed to save after delete");
            return Err(e.into());
        }

        info!(%user, %id, "run deleted");
        Ok(removed)
    }

    async fn runs(&self, user: &Username) -> Result<Vec<RunRecord>> {
        let mut records = self.storage.lock().await.load(user).await?;
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}
