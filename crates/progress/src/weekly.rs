//! Weekly aggregation by ISO week.

use std::collections::BTreeMap;
use chrono::{Datelike, Days, Weekday};
use runlog_core::{Date, RunRecord};
use serde::Serialize;

/// An ISO-8601 week.
///
/// Ordering is chronological: by ISO year, then week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekKey {
    /// ISO week-numbering year (may differ from the calendar year near January 1)
    pub iso_year: i32,
    /// Week number, 1..=53
    pub iso_week: u32,
}

impl WeekKey {
    /// The ISO week containing `date`.
    pub fn of(date: Date) -> Self {
        let week = date.iso_week();
        Self {
            iso_year: week.year(),
            iso_week: week.week(),
        }
    }

    /// Monday of this week.
    pub fn monday(&self) -> Option<Date> {
        Date::from_isoywd_opt(self.iso_year, self.iso_week, Weekday::Mon)
    }

    /// The following week.
    pub fn next(&self) -> Option<Self> {
        self.monday()
            .and_then(|monday| monday.checked_add_days(Days::new(7)))
            .map(Self::of)
    }
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.iso_week)
    }
}

/// Distance summed over one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyBucket {
    /// The week
    #[serde(flatten)]
    pub week: WeekKey,
    /// Total distance logged that week
    pub distance_km: f64,
}

/// Group runs by ISO week and sum their distances.
///
/// Only weeks that contain at least one record appear; a bucket can still
/// be zero when every run that week was logged as 0 km. Ascending by week.
pub fn weekly_breakdown(records: &[RunRecord]) -> Vec<WeeklyBucket> {
    let mut weeks: BTreeMap<WeekKey, f64> = BTreeMap::new();
    for record in records {
        *weeks.entry(WeekKey::of(record.date)).or_insert(0.0) += record.distance_km;
    }

    weeks
        .into_iter()
        .map(|(week, distance_km)| WeeklyBucket { week, distance_km })
        .collect()
}

/// Like [`weekly_breakdown`], but every week between the first and last
/// logged week is present. Weeks without runs get a zero bucket, so a
/// missed week breaks a streak.
pub fn weekly_breakdown_contiguous(records: &[RunRecord]) -> Vec<WeeklyBucket> {
    let observed = weekly_breakdown(records);
    let (Some(first), Some(last)) = (observed.first(), observed.last()) else {
        return Vec::new();
    };
    let last_week = last.week;

    let mut buckets = Vec::with_capacity(observed.len());
    let mut observed = observed.iter().peekable();
    let mut week = Some(first.week);

    while let Some(current) = week.filter(|w| *w <= last_week) {
        let distance_km = observed
            .next_if(|bucket| bucket.week == current)
            .map_or(0.0, |bucket| bucket.distance_km);
        buckets.push(WeeklyBucket { week: current, distance_km });
        week = current.next();
    }

    buckets
}
