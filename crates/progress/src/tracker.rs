//! Progress snapshots.

use std::sync::Arc;
use async_trait::async_trait;
use runlog_core::{Date, GoalConfig, RunRecord, Username};
use runlog_storage::Storage;
use serde::Serialize;
use tracing::debug;

use crate::achievements::{achievements, AchievementStatus};
use crate::forecast::{forecast, Forecast};
use crate::series::{cumulative_series, target_pace_series, SeriesPoint};
use crate::streak::{streak, Streak};
use crate::totals::{compute_totals, weekly_progress, Totals, WeekProgress};
use crate::weekly::{weekly_breakdown_contiguous, WeeklyBucket};

/// Everything derived from one user's runs at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Day the snapshot was computed for
    pub as_of: Date,

    /// Number of runs
    pub runs: usize,

    /// Overall goal progress
    pub totals: Totals,

    /// Progress in `as_of`'s week
    pub this_week: WeekProgress,

    /// Weekly streaks, over contiguous weeks
    pub streak: Streak,

    /// Pace forecast, `None` without runs
    pub forecast: Option<Forecast>,

    /// Weekly totals from the first to the last logged week
    pub weekly: Vec<WeeklyBucket>,

    /// Actual cumulative distance
    pub cumulative: Vec<SeriesPoint>,

    /// Target-pace reference line starting at the first run
    pub target_pace: Vec<SeriesPoint>,

    /// Milestones
    pub achievements: Vec<AchievementStatus>,
}

/// Computes snapshots for a fixed goal configuration.
#[derive(Debug, Clone, Default)]
pub struct ProgressEngine {
    config: GoalConfig,
}

impl ProgressEngine {
    /// Create an engine.
    pub fn new(config: GoalConfig) -> Self {
        Self { config }
    }

    /// Goal configuration in use.
    pub fn config(&self) -> &GoalConfig {
        &self.config
    }

    /// Compute a full snapshot of `records` as of `as_of`.
    pub fn snapshot(&self, records: &[RunRecord], as_of: Date) -> ProgressSnapshot {
        let goal = self.config.overall_goal_km();
        let totals = compute_totals(records, goal);
        let weekly = weekly_breakdown_contiguous(records);
        let target_pace = records
            .iter()
            .map(|r| r.date)
            .min()
            .map(|first| target_pace_series(first, goal, self.config.horizon_days()))
            .unwrap_or_default();

        let snapshot = ProgressSnapshot {
            as_of,
            runs: records.len(),
            this_week: weekly_progress(records, as_of, self.config.weekly_goal_km()),
            streak: streak(&weekly),
            forecast: forecast(records, totals.total_km, goal, as_of),
            cumulative: cumulative_series(records),
            achievements: achievements(totals.total_km, self.config.achievements()),
            totals,
            weekly,
            target_pace,
        };

        debug!(
            runs = snapshot.runs,
            total_km = snapshot.totals.total_km,
            current_streak = snapshot.streak.current,
            "computed progress snapshot"
        );
        snapshot
    }
}

/// Progress tracking service.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Take a progress snapshot of a user's runs.
    async fn snapshot(&self, user: &Username, as_of: Date) -> runlog_storage::Result<ProgressSnapshot>;
}

/// Progress tracker that reloads runs from storage on every call.
pub struct BasicProgressTracker<S: Storage> {
    storage: Arc<S>,
    engine: ProgressEngine,
}

impl<S: Storage> BasicProgressTracker<S> {
    /// Create a new progress tracker.
    pub fn new(storage: S, engine: ProgressEngine) -> Self {
        Self {
            storage: Arc::new(storage),
            engine,
        }
    }

    /// Share storage with other services.
    pub fn with_shared(storage: Arc<S>, engine: ProgressEngine) -> Self {
        Self { storage, engine }
    }
}

#[async_trait]
impl<S: Storage + 'static> ProgressTracker for BasicProgressTracker<S> {
    async fn snapshot(&self, user: &Username, as_of: Date) -> runlog_storage::Result<ProgressSnapshot> {
        let records = self.storage.load(user).await?;
        debug!(%user, %as_of, "taking snapshot");
        Ok(self.engine.snapshot(&records, as_of))
    }
}
