//! Distance totals against the overall and weekly goals.

use runlog_core::{Date, RunRecord};
use serde::Serialize;
use crate::weekly::WeekKey;

/// Progress toward the overall goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of all distances
    pub total_km: f64,
    /// Distance still missing, never negative
    pub remaining_km: f64,
    /// Completed share of the goal, in `[0, 1]`
    pub fraction: f64,
}

/// Sum all runs and compare against `overall_goal_km`.
///
/// The goal must be positive; `GoalConfig` guarantees that for
/// configured goals.
pub fn compute_totals(records: &[RunRecord], overall_goal_km: f64) -> Totals {
    debug_assert!(overall_goal_km > 0.0, "overall goal must be positive");

    let total_km: f64 = records.iter().map(|r| r.distance_km).sum();
    Totals {
        total_km,
        remaining_km: (overall_goal_km - total_km).max(0.0),
        fraction: (total_km / overall_goal_km).min(1.0),
    }
}

/// Distance logged in the ISO week containing a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekProgress {
    /// The week measured
    #[serde(flatten)]
    pub week: WeekKey,
    /// Distance logged that week
    pub distance_km: f64,
    /// Share of the weekly goal, in `[0, 1]`
    pub fraction: f64,
}

/// Distance logged during `as_of`'s ISO week, against `weekly_goal_km`.
pub fn weekly_progress(records: &[RunRecord], as_of: Date, weekly_goal_km: f64) -> WeekProgress {
    debug_assert!(weekly_goal_km > 0.0, "weekly goal must be positive");

    let week = WeekKey::of(as_of);
    let distance_km: f64 = records
        .iter()
        .filter(|r| WeekKey::of(r.date) == week)
        .map(|r| r.distance_km)
        .sum();

    WeekProgress {
        week,
        distance_km,
        fraction: (distance_km / weekly_goal_km).min(1.0),
    }
}
