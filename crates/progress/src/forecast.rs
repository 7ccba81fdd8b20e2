//! Completion date forecasting from the average pace so far.

use chrono::Days;
use runlog_core::{Date, RunRecord};
use serde::Serialize;

/// Linear pace forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    /// Day the goal is reached at the current pace. `None` while the pace
    /// is zero (nothing to extrapolate) or the date would not be
    /// representable. May lie before `as_of` once the goal is exceeded.
    pub predicted_date: Option<Date>,
    /// Average distance per day since the first run
    pub avg_km_per_day: f64,
    /// `avg_km_per_day * 7`
    pub avg_km_per_week: f64,
    /// Days between the first run and `as_of`, at least 1
    pub days_elapsed: i64,
}

impl Forecast {
    /// Whether a completion date could be predicted.
    pub fn is_forecastable(&self) -> bool {
        self.predicted_date.is_some()
    }
}

/// Extrapolate the average daily pace since the first run to the day
/// `overall_goal_km` is reached.
///
/// Returns `None` when there are no records.
pub fn forecast(
    records: &[RunRecord],
    total_km: f64,
    overall_goal_km: f64,
    as_of: Date,
) -> Option<Forecast> {
    let first_day = records.iter().map(|r| r.date).min()?;

    // Same-day starts (or an as_of before the first run) count as one day.
    let days_elapsed = (as_of - first_day).num_days().max(1);
    let avg_km_per_day = total_km / days_elapsed as f64;

    let predicted_date = if avg_km_per_day > 0.0 {
        let days_remaining = (overall_goal_km - total_km) / avg_km_per_day;
        shift_days(as_of, days_remaining)
    } else {
        None
    };

    Some(Forecast {
        predicted_date,
        avg_km_per_day,
        avg_km_per_week: avg_km_per_day * 7.0,
        days_elapsed,
    })
}

/// `date` moved by a fractional number of days, truncated to the calendar
/// day the resulting instant falls on.
fn shift_days(date: Date, days: f64) -> Option<Date> {
    if !days.is_finite() {
        return None;
    }
    // Saturating cast; out-of-range values fail the checked add below.
    let whole = days.floor() as i64;
    if whole >= 0 {
        date.checked_add_days(Days::new(whole as u64))
    } else {
        date.checked_sub_days(Days::new(whole.unsigned_abs()))
    }
}
