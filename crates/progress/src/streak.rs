//! Consecutive-week streaks.

use serde::Serialize;
use crate::weekly::WeeklyBucket;

/// Streak lengths in weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Streak {
    /// Length of the run of positive weeks ending at the last bucket
    pub current: u32,
    /// Longest run of positive weeks seen
    pub max: u32,
}

/// Count consecutive positive weeks.
///
/// Buckets must be in ascending week order. A bucket with positive
/// distance extends the streak; a zero bucket resets it. Weeks with no
/// bucket at all are not seen here, so pass the output of
/// [`weekly_breakdown_contiguous`](crate::weekly_breakdown_contiguous)
/// when missed weeks should count as breaks.
pub fn streak(buckets: &[WeeklyBucket]) -> Streak {
    let mut result = Streak::default();
    for bucket in buckets {
        if bucket.distance_km > 0.0 {
            result.current += 1;
            result.max = result.max.max(result.current);
        } else {
            result.current = 0;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::run;
    use crate::weekly::{weekly_breakdown, weekly_breakdown_contiguous};

    fn buckets(distances: &[f64]) -> Vec<WeeklyBucket> {
        distances
            .iter()
            .enumerate()
            .map(|(i, &distance_km)| WeeklyBucket {
                week: crate::WeekKey { iso_year: 2024, iso_week: i as u32 + 1 },
                distance_km,
            })
            .collect()
    }

    #[test]
    fn test_empty_streak() {
        assert_eq!(streak(&[]), Streak { current: 0, max: 0 });
    }

    #[test]
    fn test_zero_week_resets() {
        let records = vec![
            run("2024-01-01", 5.0),
            run("2024-01-08", 0.0),
            run("2024-01-15", 10.0),
        ];
        assert_eq!(streak(&weekly_breakdown(&records)), Streak { current: 1, max: 1 });
    }

    #[test]
    fn test_max_survives_reset() {
        let result = streak(&buckets(&[3.0, 4.0, 5.0, 0.0, 2.0]));
        assert_eq!(result, Streak { current: 1, max: 3 });
    }

    #[test]
    fn test_trailing_zero_week() {
        let result = streak(&buckets(&[3.0, 4.0, 0.0]));
        assert_eq!(result, Streak { current: 0, max: 2 });
    }

    #[test]
    fn test_max_never_below_current() {
        let patterns: [&[f64]; 4] = [
            &[1.0, 1.0, 1.0],
            &[0.0, 1.0],
            &[1.0, 0.0, 1.0, 1.0, 1.0, 1.0],
            &[0.0, 0.0],
        ];
        for pattern in patterns {
            let result = streak(&buckets(pattern));
            assert!(result.max >= result.current, "{pattern:?}");
        }
    }

    #[test]
    fn test_missed_week_breaks_contiguous_streak() {
        let records = vec![
            run("2024-01-01", 5.0),
            run("2024-01-08", 5.0),
            run("2024-01-22", 5.0),
        ];
        assert_eq!(streak(&weekly_breakdown(&records)), Streak { current: 3, max: 3 });
        assert_eq!(
            streak(&weekly_breakdown_contiguous(&records)),
            Streak { current: 1, max: 2 }
        );
    }
}
