//! Level Codec - Conversion between 1-5 levels and raw criterion values.
//!
//! Two directions with deliberately different semantics:
//!
//! - level → value returns the band's fixed representative point
//!   (CPU 3 → 6 cores).
//! - value → level walks the bands in order and returns the first whose upper
//!   bound is at least the value; anything above the fourth upper bound is
//!   level 5, anything below the first band's lower bound is still level 1.
//!
//! The two are not inverses, but every representative point maps back to
//! its own level.

use serde::Serialize;

use super::AnalysisError;
use crate::domain::foundation::{Criterion, Level};

/// One of the five bands of a criterion's breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelBand {
    pub level: u8,
    /// Documented lower bound of the band (informational only).
    pub lower: f64,
    /// Inclusive upper bound; `None` for the open-ended top band.
    pub upper: Option<f64>,
    /// Value used for this level in the decision matrix.
    pub representative: f64,
    pub label: &'static str,
}

const fn band(
    level: u8,
    lower: f64,
    upper: Option<f64>,
    representative: f64,
    label: &'static str,
) -> LevelBand {
    LevelBand {
        level,
        lower,
        upper,
        representative,
        label,
    }
}

const CPU_BANDS: [LevelBand; 5] = [
    band(1, 1.0, Some(2.0), 2.0, "Very Low"),
    band(2, 3.0, Some(4.0), 4.0, "Low"),
    band(3, 5.0, Some(6.0), 6.0, "Medium"),
    band(4, 7.0, Some(8.0), 8.0, "High"),
    band(5, 9.0, None, 10.0, "Very High"),
];

const RAM_BANDS: [LevelBand; 5] = [
    band(1, 1.0, Some(2.0), 2.0, "Very Low"),
    band(2, 3.0, Some(4.0), 4.0, "Low"),
    band(3, 5.0, Some(8.0), 8.0, "Medium"),
    band(4, 9.0, Some(16.0), 16.0, "High"),
    band(5, 17.0, None, 32.0, "Very High"),
];

const DISK_IO_BANDS: [LevelBand; 5] = [
    band(1, 100.0, Some(200.0), 150.0, "Very Low"),
    band(2, 201.0, Some(400.0), 300.0, "Low"),
    band(3, 401.0, Some(600.0), 500.0, "Medium"),
    band(4, 601.0, Some(800.0), 700.0, "High"),
    band(5, 801.0, None, 1000.0, "Very High"),
];

const PRICE_BANDS: [LevelBand; 5] = [
    band(1, 5.0, Some(20.0), 15.0, "Very Cheap"),
    band(2, 21.0, Some(50.0), 35.0, "Cheap"),
    band(3, 51.0, Some(100.0), 75.0, "Medium"),
    band(4, 101.0, Some(200.0), 150.0, "Expensive"),
    band(5, 201.0, None, 250.0, "Very Expensive"),
];

/// Stateless converter over the fixed per-criterion breakpoint tables.
pub struct LevelCodec;

impl LevelCodec {
    /// Returns the breakpoint table for a criterion, lowest level first.
    pub fn bands(criterion: Criterion) -> &'static [LevelBand; 5] {
        match criterion {
            Criterion::Cpu => &CPU_BANDS,
            Criterion::Ram => &RAM_BANDS,
            Criterion::DiskIo => &DISK_IO_BANDS,
            Criterion::Price => &PRICE_BANDS,
        }
    }

    /// Returns the band for a validated level.
    pub fn band(criterion: Criterion, level: Level) -> &'static LevelBand {
        &Self::bands(criterion)[level.position()]
    }

    /// Representative value for a validated level.
    pub fn value_of(criterion: Criterion, level: Level) -> f64 {
        Self::band(criterion, level).representative
    }

    /// Representative value for a raw level.
    ///
    /// # Errors
    /// `InvalidLevel` if `level` is outside 1..=5.
    pub fn level_to_value(criterion: Criterion, level: i64) -> Result<f64, AnalysisError> {
        let level = Level::try_from_i64(level)
            .map_err(|_| AnalysisError::InvalidLevel { criterion, level })?;
        Ok(Self::value_of(criterion, level))
    }

    /// Classifies a raw value into its level using the "at most" thresholds.
    ///
    /// # Errors
    /// `InvalidValue` if `value` is negative, NaN or infinite.
    pub fn value_to_level(criterion: Criterion, value: f64) -> Result<Level, AnalysisError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AnalysisError::InvalidValue { criterion, value });
        }

        Level::all()
            .zip(Self::bands(criterion).iter())
            .find(|(_, band)| band.upper.map_or(true, |upper| value <= upper))
            .map(|(level, _)| level)
            .ok_or(AnalysisError::InvalidValue { criterion, value })
    }
}
