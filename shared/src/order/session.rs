//! Session keys
//!
//! A session is one meal slot (day index + lunch/dinner) holding its own
//! independent list of selected dishes. The canonical string form is
//! `day{N}-{slot}`, e.g. `day1-lunch`, and is what crosses the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Meal slot within a day
///
/// Ordering is chronological: lunch sorts before dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealSlot {
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = SessionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(SessionKeyError::InvalidSlot(other.to_string())),
        }
    }
}

/// Error parsing or constructing a session key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionKeyError {
    #[error("session key must have the form day{{N}}-{{slot}}, got {0:?}")]
    InvalidFormat(String),
    #[error("day index must be >= 1")]
    InvalidDay,
    #[error("unknown meal slot {0:?}")]
    InvalidSlot(String),
}

/// Composite session identifier: `(day index >= 1, meal slot)`
///
/// Total ordering is chronological (day, then slot), which makes map
/// iteration over sessions deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionKey {
    day: u32,
    slot: MealSlot,
}

impl SessionKey {
    /// Construct a key; the day index is 1-based
    pub fn new(day: u32, slot: MealSlot) -> Result<Self, SessionKeyError> {
        if day == 0 {
            return Err(SessionKeyError::InvalidDay);
        }
        Ok(Self { day, slot })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn slot(&self) -> MealSlot {
        self.slot
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day{}-{}", self.day, self.slot)
    }
}

impl FromStr for SessionKey {
    type Err = SessionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("day")
            .ok_or_else(|| SessionKeyError::InvalidFormat(s.to_string()))?;
        let (day_str, slot_str) = rest
            .split_once('-')
            .ok_or_else(|| SessionKeyError::InvalidFormat(s.to_string()))?;
        let day: u32 = day_str
            .parse()
            .map_err(|_| SessionKeyError::InvalidFormat(s.to_string()))?;
        let slot = slot_str.parse()?;
        Self::new(day, slot)
    }
}

impl Serialize for SessionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let key = SessionKey::new(1, MealSlot::Lunch).unwrap();
        assert_eq!(key.to_string(), "day1-lunch");
        assert_eq!("day1-lunch".parse::<SessionKey>().unwrap(), key);

        let key = SessionKey::new(12, MealSlot::Dinner).unwrap();
        assert_eq!(key.to_string(), "day12-dinner");
        assert_eq!("day12-dinner".parse::<SessionKey>().unwrap(), key);
    }

    #[test]
    fn test_parse_rejects_day_zero() {
        assert_eq!(
            "day0-lunch".parse::<SessionKey>(),
            Err(SessionKeyError::InvalidDay)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "lunch".parse::<SessionKey>(),
            Err(SessionKeyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "day1".parse::<SessionKey>(),
            Err(SessionKeyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "dayX-lunch".parse::<SessionKey>(),
            Err(SessionKeyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "day1-brunch".parse::<SessionKey>(),
            Err(SessionKeyError::InvalidSlot(_))
        ));
    }

    #[test]
    fn test_chronological_ordering() {
        let d1_lunch = SessionKey::new(1, MealSlot::Lunch).unwrap();
        let d1_dinner = SessionKey::new(1, MealSlot::Dinner).unwrap();
        let d2_lunch = SessionKey::new(2, MealSlot::Lunch).unwrap();
        assert!(d1_lunch < d1_dinner);
        assert!(d1_dinner < d2_lunch);
    }

    #[test]
    fn test_serde_as_string() {
        let key = SessionKey::new(2, MealSlot::Dinner).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"day2-dinner\"");
        let back: SessionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
