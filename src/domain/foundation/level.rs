//! Level value object for the 1-5 ordinal criterion scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Ordinal criterion level: 1 (lowest) to 5 (highest).
///
/// Serialized as the bare integer so stored rows stay human-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Level from an integer, returning error if out of range.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Level(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "level",
                Self::MIN as i32,
                Self::MAX as i32,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Zero-based position, used to index breakpoint tables.
    pub(crate) fn position(&self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// All five levels, lowest first.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }
}

impl TryFrom<i64> for Level {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Level::try_from_i64(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_accepts_one_through_five() {
        for raw in 1..=5 {
            assert_eq!(Level::try_from_i64(raw).unwrap().value() as i64, raw);
        }
    }

    #[test]
    fn level_rejects_out_of_range_values() {
        assert!(Level::try_from_i64(0).is_err());
        assert!(Level::try_from_i64(6).is_err());
        assert!(Level::try_from_i64(-1).is_err());
        assert!(Level::try_from_i64(i64::MAX).is_err());
    }

    #[test]
    fn level_out_of_range_reports_bounds() {
        let err = Level::try_from_i64(9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'level' must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn level_all_yields_five_ascending() {
        let levels: Vec<u8> = Level::all().map(|l| l.value()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn level_serializes_as_integer() {
        let level = Level::try_from_i64(3).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "3");
        let parsed: Level = serde_json::from_str("4").unwrap();
        assert_eq!(parsed.value(), 4);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }
}
