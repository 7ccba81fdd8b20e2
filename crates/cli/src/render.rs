//! Text output for the terminal.

use std::collections::HashMap;
use std::fmt::Write;

use runlog_core::{Date, GoalConfig, RunRecord};
use runlog_progress::{ProgressSnapshot, SeriesPoint, WeeklyBucket};

const BAR_WIDTH: usize = 30;

/// Distance with one decimal.
pub fn km(value: f64) -> String {
    format!("{value:.1}")
}

/// `[#####.....]  42%` style bar for a fraction in `[0, 1]`.
pub fn bar(fraction: f64) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        fraction * 100.0
    )
}

/// All runs, one per line.
pub fn run_table(runs: &[RunRecord]) -> String {
    if runs.is_empty() {
        return "No runs logged yet.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<10}  {:>7}  {:<26}  Comment", "Date", "Km", "ID");
    for run in runs {
        let _ = writeln!(
            out,
            "{:<10}  {:>7}  {:<26}  {}",
            run.date,
            km(run.distance_km),
            run.id,
            run.comment.as_deref().unwrap_or("")
        );
    }
    out
}

/// Goal dashboard.
pub fn status(snapshot: &ProgressSnapshot, config: &GoalConfig) -> String {
    if snapshot.runs == 0 {
        return "No runs logged yet.\n".to_string();
    }

    let mut out = String::new();
    let totals = &snapshot.totals;
    let _ = writeln!(out, "Goal {} km", km(config.overall_goal_km()));
    let _ = writeln!(out, "  {}", bar(totals.fraction));
    let _ = writeln!(out, "  Total:      {} km", km(totals.total_km));
    let _ = writeln!(out, "  Remaining:  {} km", km(totals.remaining_km));

    let week = &snapshot.this_week;
    let _ = writeln!(out, "This week ({}), goal {} km", week.week, km(config.weekly_goal_km()));
    let _ = writeln!(out, "  {}", bar(week.fraction));
    let _ = writeln!(out, "  Distance:   {} km", km(week.distance_km));

    let _ = writeln!(
        out,
        "Streak: {} week(s), best {}",
        snapshot.streak.current, snapshot.streak.max
    );

    if let Some(forecast) = &snapshot.forecast {
        let _ = writeln!(
            out,
            "Pace: {:.2} km/day, {} km/week",
            forecast.avg_km_per_day,
            km(forecast.avg_km_per_week)
        );
        match forecast.predicted_date {
            Some(date) => {
                let _ = writeln!(out, "Forecast: goal reached on {date}");
            }
            None => {
                let _ = writeln!(out, "Forecast: not available yet");
            }
        }
    }

    let _ = writeln!(out, "Achievements:");
    for achievement in &snapshot.achievements {
        let mark = if achievement.achieved { "x" } else { " " };
        let _ = writeln!(
            out,
            "  [{mark}] {} ({} km)",
            achievement.name,
            km(achievement.threshold_km)
        );
    }
    out
}

/// Weekly totals against the weekly goal.
pub fn weekly(buckets: &[WeeklyBucket], weekly_goal_km: f64) -> String {
    if buckets.is_empty() {
        return "No runs logged yet.\n".to_string();
    }

    let mut out = String::new();
    for bucket in buckets {
        let _ = writeln!(
            out,
            "{}  {:>7} km  {}",
            bucket.week,
            km(bucket.distance_km),
            bar((bucket.distance_km / weekly_goal_km).min(1.0))
        );
    }
    out
}

/// Actual cumulative distance next to the target pace on the same day.
pub fn chart(cumulative: &[SeriesPoint], target: &[SeriesPoint]) -> String {
    if cumulative.is_empty() {
        return "No runs logged yet.\n".to_string();
    }

    let target: HashMap<Date, f64> = target.iter().map(|p| (p.date, p.value_km)).collect();
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}  {:>9}  {:>9}", "Date", "Actual", "Target");
    for point in cumulative {
        let target = target.get(&point.date).map(|v| km(*v)).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{:<10}  {:>9}  {:>9}", point.date, km(point.value_km), target);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlog_core::NewRun;
    use runlog_progress::ProgressEngine;

    fn date(s: &str) -> Date {
        Date::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), format!("[{}]   0%", ".".repeat(BAR_WIDTH)));
        assert_eq!(bar(1.0), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert_eq!(bar(0.5).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_empty_outputs() {
        let snapshot = ProgressEngine::default().snapshot(&[], date("2024-01-01"));
        assert!(status(&snapshot, &GoalConfig::default()).contains("No runs"));
        assert!(run_table(&[]).contains("No runs"));
        assert!(chart(&[], &[]).contains("No runs"));
    }

    #[test]
    fn test_status_mentions_forecast_and_achievements() {
        let runs = vec![
            NewRun::new("2024-01-01", 120.0).validate(date("2024-01-01")).unwrap(),
            NewRun::new("2024-01-09", 30.0).validate(date("2024-01-01")).unwrap(),
        ];
        let snapshot = ProgressEngine::default().snapshot(&runs, date("2024-01-11"));
        let text = status(&snapshot, &GoalConfig::default());

        assert!(text.contains("Total:      150.0 km"));
        assert!(text.contains("Forecast: goal reached on"));
        assert!(text.contains("[x] Bronze"));
        assert!(text.contains("[ ] Gold"));
        assert!(text.contains("Streak: 2 week(s), best 2"));
    }

    #[test]
    fn test_chart_pairs_target_by_date() {
        let cumulative = vec![SeriesPoint { date: date("2024-01-02"), value_km: 5.0 }];
        let target = vec![
            SeriesPoint { date: date("2024-01-01"), value_km: 0.0 },
            SeriesPoint { date: date("2024-01-02"), value_km: 5.0 },
        ];
        let text = chart(&cumulative, &target);
        assert!(text.lines().nth(1).unwrap().ends_with("5.0        5.0"));
    }
}
