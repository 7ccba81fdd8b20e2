//! Distance milestones.

use runlog_core::Achievement;
use serde::Serialize;

/// Whether one milestone has been reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementStatus {
    /// Milestone name
    pub name: String,
    /// Distance needed
    pub threshold_km: f64,
    /// `total >= threshold`
    pub achieved: bool,
}

/// Check each milestone of `ladder` against `total_km`, keeping ladder order.
pub fn achievements(total_km: f64, ladder: &[Achievement]) -> Vec<AchievementStatus> {
    ladder
        .iter()
        .map(|a| AchievementStatus {
            name: a.name.clone(),
            threshold_km: a.threshold_km,
            achieved: total_km >= a.threshold_km,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achieved(total: f64) -> Vec<(String, bool)> {
        achievements(total, &Achievement::default_ladder())
            .into_iter()
            .map(|s| (s.name, s.achieved))
            .collect()
    }

    #[test]
    fn test_nothing_achieved() {
        assert!(achieved(0.0).iter().all(|(_, a)| !a));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(
            achieved(300.0),
            vec![
                ("Bronze".to_string(), true),
                ("Silver".to_string(), true),
                ("Gold".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_all_achieved() {
        assert!(achieved(600.0).iter().all(|(_, a)| *a));
    }

    #[test]
    fn test_empty_ladder() {
        assert!(achievements(1000.0, &[]).is_empty());
    }
}
