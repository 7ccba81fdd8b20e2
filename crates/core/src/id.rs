//! Identifiers for run records and the users that own them.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a RunRecord
///
/// ULIDs sort by creation time, so identifiers assigned later compare
/// greater (at millisecond resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunId(Ulid);

impl RunId {
    /// Generate a new RunId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RunId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Maximum length of a username.
const MAX_USERNAME_LEN: usize = 64;

/// Rejected username.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUsername {
    /// Empty or whitespace only
    #[error("username must not be empty")]
    Empty,

    /// Longer than the allowed maximum
    #[error("username is longer than 64 characters")]
    TooLong,

    /// Contains a character outside `[A-Za-z0-9._-]` or starts with `.`
    #[error("username contains invalid character {0:?}")]
    InvalidChar(char),
}

/// Name of the profile a record set belongs to.
///
/// Usernames double as storage keys, so they are restricted to a
/// filename-safe alphabet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidUsername> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidUsername::Empty);
        }
        if trimmed.chars().count() > MAX_USERNAME_LEN {
            return Err(InvalidUsername::TooLong);
        }
        if trimmed.starts_with('.') {
            return Err(InvalidUsername::InvalidChar('.'));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(InvalidUsername::InvalidChar(c));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = InvalidUsername;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = InvalidUsername;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_roundtrip() {
        let id = RunId::new();
        let parsed: RunId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_run_id_rejects_garbage() {
        assert!("not-a-ulid".parse::<RunId>().is_err());
    }

    #[test]
    fn test_username_accepts_safe_names() {
        assert_eq!(Username::new("anna").unwrap().as_str(), "anna");
        assert_eq!(Username::new("  matti_v-2.0 ").unwrap().as_str(), "matti_v-2.0");
    }

    #[test]
    fn test_username_rejections() {
        assert_eq!(Username::new("   "), Err(InvalidUsername::Empty));
        assert_eq!(Username::new("../etc"), Err(InvalidUsername::InvalidChar('.')));
        assert_eq!(Username::new("a/b"), Err(InvalidUsername::InvalidChar('/')));
        assert_eq!(Username::new("x".repeat(65)), Err(InvalidUsername::TooLong));
    }

    #[test]
    fn test_username_serde_validates() {
        let ok: Username = serde_json::from_str("\"runner\"").unwrap();
        assert_eq!(ok.to_string(), "runner");
        assert!(serde_json::from_str::<Username>("\"bad name\"").is_err());
    }
}
