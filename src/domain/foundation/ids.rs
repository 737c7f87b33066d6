//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Ordinal identifier of an alternative in the catalog.
///
/// Dense and 1-based: removing an alternative renumbers the ones after it,
/// so an `AlternativeId` is a display position, not a stable reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeId(u32);

impl AlternativeId {
    /// Creates an id from its ordinal value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Id for the alternative at a zero-based position.
    pub fn from_position(position: usize) -> Self {
        Self(position as u32 + 1)
    }

    /// Returns the ordinal value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlternativeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Identifier of a saved calculation in the history ledger.
///
/// Allocated from a monotonic counter and never reused, even after deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(u64);

impl HistoryId {
    /// Creates an id from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HistoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
