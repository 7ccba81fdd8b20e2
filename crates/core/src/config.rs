//! Goal configuration - targets the progress engine measures against.

use serde::{Deserialize, Serialize};

/// Default overall distance goal in kilometers.
pub const DEFAULT_OVERALL_GOAL_KM: f64 = 600.0;

/// Default weekly distance goal in kilometers.
pub const DEFAULT_WEEKLY_GOAL_KM: f64 = 35.0;

/// Default length of the target-pace reference line in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 120;

/// Longest accepted target-pace horizon (about 100 years).
pub const MAX_HORIZON_DAYS: u32 = 36_600;

/// Goal configuration was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A goal was zero, negative or not a number
    #[error("{name} must be a positive number of kilometers (got {value})")]
    NonPositiveGoal {
        /// Which goal
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// An achievement threshold was negative or not a number
    #[error("achievement {name:?} needs a non-negative threshold (got {value})")]
    InvalidThreshold {
        /// Achievement name
        name: String,
        /// Rejected value
        value: f64,
    },

    /// Target-pace horizon longer than [`MAX_HORIZON_DAYS`]
    #[error("horizon of {0} days exceeds the maximum of 36600 days")]
    HorizonTooLong(u32),
}

/// A named distance milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Display name
    pub name: String,

    /// Total distance needed, in kilometers
    pub threshold_km: f64,
}

impl Achievement {
    /// Create an achievement.
    pub fn new(name: impl Into<String>, threshold_km: f64) -> Self {
        Self {
            name: name.into(),
            threshold_km,
        }
    }

    /// The Bronze / Silver / Gold ladder.
    pub fn default_ladder() -> Vec<Achievement> {
        vec![
            Achievement::new("Bronze", 100.0),
            Achievement::new("Silver", 300.0),
            Achievement::new("Gold", 600.0),
        ]
    }
}

/// Validated goal configuration.
///
/// Fields are private so a `GoalConfig` with a non-positive goal cannot
/// exist; the engine relies on that instead of checking per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalConfig {
    overall_goal_km: f64,
    weekly_goal_km: f64,
    horizon_days: u32,
    achievements: Vec<Achievement>,
}

impl GoalConfig {
    /// Create a configuration with the default horizon and achievement ladder.
    pub fn new(overall_goal_km: f64, weekly_goal_km: f64) -> Result<Self, ConfigError> {
        check_goal("overall goal", overall_goal_km)?;
        check_goal("weekly goal", weekly_goal_km)?;
        Ok(Self {
            overall_goal_km,
            weekly_goal_km,
            horizon_days: DEFAULT_HORIZON_DAYS,
            achievements: Achievement::default_ladder(),
        })
    }

    /// Set the target-pace horizon.
    pub fn with_horizon_days(mut self, days: u32) -> Result<Self, ConfigError> {
        if days > MAX_HORIZON_DAYS {
            return Err(ConfigError::HorizonTooLong(days));
        }
        self.horizon_days = days;
        Ok(self)
    }

    /// Replace the achievement ladder.
    pub fn with_achievements(mut self, achievements: Vec<Achievement>) -> Result<Self, ConfigError> {
        if let Some(bad) = achievements
            .iter()
            .find(|a| !a.threshold_km.is_finite() || a.threshold_km < 0.0)
        {
            return Err(ConfigError::InvalidThreshold {
                name: bad.name.clone(),
                value: bad.threshold_km,
            });
        }
        self.achievements = achievements;
        Ok(self)
    }

    /// Overall distance goal (km), always > 0.
    pub fn overall_goal_km(&self) -> f64 {
        self.overall_goal_km
    }

    /// Weekly distance goal (km), always > 0.
    pub fn weekly_goal_km(&self) -> f64 {
        self.weekly_goal_km
    }

    /// Days covered by the target-pace line.
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Achievement ladder in display order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            overall_goal_km: DEFAULT_OVERALL_GOAL_KM,
            weekly_goal_km: DEFAULT_WEEKLY_GOAL_KM,
            horizon_days: DEFAULT_HORIZON_DAYS,
            achievements: Achievement::default_ladder(),
        }
    }
}

fn check_goal(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // `!(value > 0.0)` also catches NaN
    if !(value > 0.0) || value.is_infinite() {
        return Err(ConfigError::NonPositiveGoal { name, value });
    }
    Ok(())
}
