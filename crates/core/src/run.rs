//! Run record model - one logged run.

use serde::{Deserialize, Serialize};
use crate::id::RunId;
use crate::{Date, Time};

/// Date format accepted on input and written to storage (ISO-8601).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record failed boundary validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRecord {
    /// Date text is not a valid `YYYY-MM-DD` calendar date
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Distance below zero
    #[error("distance must not be negative (got {0} km)")]
    NegativeDistance(f64),

    /// NaN or infinite distance
    #[error("distance must be a finite number")]
    NonFiniteDistance,
}

/// A single logged run.
///
/// Records are created once and never edited; removing one is done by
/// identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique identifier
    pub id: RunId,

    /// Day of the run
    pub date: Date,

    /// Distance in kilometers
    pub distance_km: f64,

    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// When the entry was recorded
    pub created_at: Time,
}

impl RunRecord {
    /// Check the invariants of a record that came from outside the
    /// process (for example, a storage file).
    pub fn validate(&self) -> Result<(), InvalidRecord> {
        check_distance(self.distance_km)
    }
}

/// Unvalidated input for a new run.
#[derive(Debug, Clone, Default)]
pub struct NewRun {
    /// Date text (`YYYY-MM-DD`); `None` means "today"
    pub date: Option<String>,

    /// Distance in kilometers
    pub distance_km: f64,

    /// Optional note
    pub comment: Option<String>,
}

impl NewRun {
    /// Create input for a run on `date` (`YYYY-MM-DD`).
    pub fn new(date: impl Into<String>, distance_km: f64) -> Self {
        Self {
            date: Some(date.into()),
            distance_km,
            comment: None,
        }
    }

    /// Attach a comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Validate the input and assign an identifier.
    ///
    /// `today` is used when no date was given.
    pub fn validate(self, today: Date) -> Result<RunRecord, InvalidRecord> {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(text) => parse_date(text)?,
        };
        check_distance(self.distance_km)?;

        let comment = self
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(RunRecord {
            id: RunId::new(),
            date,
            distance_km: self.distance_km,
            comment,
            created_at: chrono::Utc::now(),
        })
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<Date, InvalidRecord> {
    Date::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| InvalidRecord::InvalidDate(text.to_string()))
}

fn check_distance(distance_km: f64) -> Result<(), InvalidRecord> {
    if !distance_km.is_finite() {
        return Err(InvalidRecord::NonFiniteDistance);
    }
    if distance_km < 0.0 {
        return Err(InvalidRecord::NegativeDistance(distance_km));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> Date {
        Date::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_validate_parses_date_and_trims_comment() {
        let record = NewRun::new("2024-01-08", 7.5)
            .with_comment("  easy loop  ")
            .validate(today())
            .unwrap();

        assert_eq!(record.date, Date::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(record.distance_km, 7.5);
        assert_eq!(record.comment.as_deref(), Some("easy loop"));
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let input = NewRun { distance_km: 3.0, ..Default::default() };
        assert_eq!(input.validate(today()).unwrap().date, today());
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let record = NewRun::new("2024-01-08", 1.0)
            .with_comment("   ")
            .validate(today())
            .unwrap();
        assert!(record.comment.is_none());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            NewRun::new("2024-02-30", 1.0).validate(today()),
            Err(InvalidRecord::InvalidDate("2024-02-30".to_string()))
        );
        assert_eq!(
            NewRun::new("2024-02-01", -0.5).validate(today()),
            Err(InvalidRecord::NegativeDistance(-0.5))
        );
        assert_eq!(
            NewRun::new("2024-02-01", f64::NAN).validate(today()),
            Err(InvalidRecord::NonFiniteDistance)
        );
    }

    #[test]
    fn test_zero_distance_is_allowed() {
        assert!(NewRun::new("2024-02-01", 0.0).validate(today()).is_ok());
    }

    #[test]
    fn test_serialized_layout() {
        let record = NewRun::new("2024-01-01", 5.0).validate(today()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["distance_km"], 5.0);
        assert!(json.get("comment").is_none());
        assert_eq!(json["id"], record.id.to_string());
    }
}
