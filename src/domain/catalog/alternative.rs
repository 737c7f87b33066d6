//! Alternative - A vendor plan with its four criterion levels.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalysisError, CriterionRow, LevelCodec};
use crate::domain::foundation::{AlternativeId, Criterion, Level, ValidationError};

/// Levels of the four criteria for one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriterionLevels {
    pub cpu: Level,
    pub ram: Level,
    pub disk_io: Level,
    pub price: Level,
}

impl CriterionLevels {
    pub fn new(cpu: Level, ram: Level, disk_io: Level, price: Level) -> Self {
        Self {
            cpu,
            ram,
            disk_io,
            price,
        }
    }

    /// Validates raw integer levels.
    ///
    /// # Errors
    /// `InvalidLevel` naming the first criterion outside 1..=5.
    pub fn from_raw(cpu: i64, ram: i64, disk_io: i64, price: i64) -> Result<Self, AnalysisError> {
        let level = |criterion: Criterion, raw: i64| {
            Level::try_from_i64(raw).map_err(|_| AnalysisError::InvalidLevel {
                criterion,
                level: raw,
            })
        };

        Ok(Self {
            cpu: level(Criterion::Cpu, cpu)?,
            ram: level(Criterion::Ram, ram)?,
            disk_io: level(Criterion::DiskIo, disk_io)?,
            price: level(Criterion::Price, price)?,
        })
    }

    pub fn get(&self, criterion: Criterion) -> Level {
        match criterion {
            Criterion::Cpu => self.cpu,
            Criterion::Ram => self.ram,
            Criterion::DiskIo => self.disk_io,
            Criterion::Price => self.price,
        }
    }

    /// Representative values of the four levels in column order.
    pub fn values(&self) -> CriterionRow {
        Criterion::ALL.map(|criterion| LevelCodec::value_of(criterion, self.get(criterion)))
    }
}

/// Validated input for creating or replacing an alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeDraft {
    vendor: String,
    plan: String,
    levels: CriterionLevels,
}

impl AlternativeDraft {
    /// Creates a draft; the vendor name is trimmed and must not be empty.
    pub fn new(
        vendor: impl Into<String>,
        plan: impl Into<String>,
        levels: CriterionLevels,
    ) -> Result<Self, ValidationError> {
        let vendor = vendor.into().trim().to_string();
        if vendor.is_empty() {
            return Err(ValidationError::empty_field("vendor"));
        }

        Ok(Self {
            vendor,
            plan: plan.into().trim().to_string(),
            levels,
        })
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    pub fn levels(&self) -> CriterionLevels {
        self.levels
    }
}

/// A hosting alternative in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub vendor: String,
    pub plan: String,
    pub levels: CriterionLevels,
}

impl Alternative {
    /// Builds an alternative at the given ordinal from a draft.
    pub fn from_draft(id: AlternativeId, draft: AlternativeDraft) -> Self {
        Self {
            id,
            vendor: draft.vendor,
            plan: draft.plan,
            levels: draft.levels,
        }
    }

    /// Representative criterion values used in the decision matrix.
    pub fn values(&self) -> CriterionRow {
        self.levels.values()
    }
}
