//! Progress Engine
//!
//! Totals, weekly aggregation, streaks, completion forecasts and chart
//! series computed from one user's run records. Everything except
//! [`tracker::BasicProgressTracker`] is a pure function of its inputs.

#![warn(missing_docs)]

pub mod totals;
pub mod weekly;
pub mod streak;
pub mod forecast;
pub mod series;
pub mod achievements;
pub mod tracker;

pub use totals::{compute_totals, weekly_progress, Totals, WeekProgress};
pub use weekly::{weekly_breakdown, weekly_breakdown_contiguous, WeekKey, WeeklyBucket};
pub use streak::{streak, Streak};
pub use forecast::{forecast, Forecast};
pub use series::{cumulative_series, target_pace_series, SeriesPoint};
pub use achievements::{achievements, AchievementStatus};
pub use tracker::{ProgressEngine, ProgressSnapshot, ProgressTracker, BasicProgressTracker};
