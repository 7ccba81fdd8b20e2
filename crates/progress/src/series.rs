//! Chart series: actual cumulative distance and the target-pace line.

use chrono::Days;
use runlog_core::{Date, RunRecord};
use serde::Serialize;

/// One point of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// X axis
    pub date: Date,
    /// Y axis, kilometers
    pub value_km: f64,
}

/// Running total of distance, one point per record in date order.
///
/// Records on the same day keep their input order and each get their own
/// point.
pub fn cumulative_series(records: &[RunRecord]) -> Vec<SeriesPoint> {
    let mut sorted: Vec<&RunRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut total = 0.0;
    sorted
        .into_iter()
        .map(|r| {
            total += r.distance_km;
            SeriesPoint { date: r.date, value_km: total }
        })
        .collect()
}

/// Straight line from 0 on `first_day` to `overall_goal_km` on
/// `first_day + horizon_days`, one point per day inclusive.
///
/// A zero horizon yields the single point `(first_day, goal)`. When the
/// end date is past the last representable date the series is empty.
pub fn target_pace_series(first_day: Date, overall_goal_km: f64, horizon_days: u32) -> Vec<SeriesPoint> {
    if horizon_days == 0 {
        return vec![SeriesPoint { date: first_day, value_km: overall_goal_km }];
    }
    if first_day.checked_add_days(Days::new(u64::from(horizon_days))).is_none() {
        return Vec::new();
    }

    (0..=horizon_days)
        .map_while(|i| {
            let date = first_day.checked_add_days(Days::new(u64::from(i)))?;
            let value_km = overall_goal_km * (f64::from(i) / f64::from(horizon_days));
            Some(SeriesPoint { date, value_km })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{date, run};

    #[test]
    fn test_empty_cumulative() {
        assert!(cumulative_series(&[]).is_empty());
    }

    #[test]
    fn test_cumulative_sorts_and_accumulates() {
        let records = vec![
            run("2024-01-05", 3.0),
            run("2024-01-01", 5.0),
            run("2024-01-03", 2.0),
        ];
        let series = cumulative_series(&records);

        let dates: Vec<Date> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date("2024-01-01"), date("2024-01-03"), date("2024-01-05")]);
        let values: Vec<f64> = series.iter().map(|p| p.value_km).collect();
        assert_eq!(values, vec![5.0, 7.0, 10.0]);
    }

    #[test]
    fn test_same_day_runs_each_get_a_point() {
        let morning = run("2024-01-02", 4.0);
        let evening = run("2024-01-02", 6.0);
        let records = vec![run("2024-01-03", 1.0), morning, evening];
        let series = cumulative_series(&records);

        let values: Vec<f64> = series.iter().map(|p| p.value_km).collect();
        assert_eq!(values, vec![4.0, 10.0, 11.0]);
    }

    #[test]
    fn test_cumulative_is_non_decreasing_and_ends_at_total() {
        let records = vec![
            run("2024-03-01", 0.0),
            run("2024-01-10", 12.5),
            run("2024-02-14", 7.25),
            run("2024-01-10", 3.0),
        ];
        let series = cumulative_series(&records);
        assert!(series.windows(2).all(|w| w[0].value_km <= w[1].value_km));

        let total: f64 = records.iter().map(|r| r.distance_km).sum();
        assert_eq!(series.last().unwrap().value_km, total);
    }

    #[test]
    fn test_target_pace_endpoints() {
        let series = target_pace_series(date("2024-01-01"), 600.0, 120);
        assert_eq!(series.len(), 121);
        assert_eq!(series[0], SeriesPoint { date: date("2024-01-01"), value_km: 0.0 });
        assert_eq!(series[120].date, date("2024-04-30"));
        assert_eq!(series[120].value_km, 600.0);
        assert!((series[60].value_km - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_pace_past_max_date_is_empty() {
        let near_end = Date::MAX.checked_sub_days(Days::new(10)).unwrap();
        assert!(target_pace_series(near_end, 600.0, 120).is_empty());

        let series = target_pace_series(near_end, 600.0, 10);
        assert_eq!(series.len(), 11);
        assert_eq!(series.last().unwrap().date, Date::MAX);
        assert_eq!(series.last().unwrap().value_km, 600.0);
    }

    #[test]
    fn test_target_pace_zero_horizon() {
        let series = target_pace_series(date("2024-01-01"), 600.0, 0);
        assert_eq!(series, vec![SeriesPoint { date: date("2024-01-01"), value_km: 600.0 }]);
    }
}
