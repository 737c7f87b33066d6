//! Ranking criteria and their benefit/cost polarity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of criteria every alternative is measured on.
pub const CRITERIA_COUNT: usize = 4;

/// Whether a higher raw value is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    /// Higher is better.
    Benefit,
    /// Lower is better.
    Cost,
}

/// A criterion of the decision matrix, in fixed column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Cpu,
    Ram,
    DiskIo,
    Price,
}

impl Criterion {
    /// All criteria in column order: CPU, RAM, disk I/O, price.
    pub const ALL: [Criterion; CRITERIA_COUNT] =
        [Criterion::Cpu, Criterion::Ram, Criterion::DiskIo, Criterion::Price];

    /// Column index of this criterion in a decision matrix.
    pub fn index(&self) -> usize {
        match self {
            Criterion::Cpu => 0,
            Criterion::Ram => 1,
            Criterion::DiskIo => 2,
            Criterion::Price => 3,
        }
    }

    /// Polarity is fixed: CPU, RAM and disk I/O are benefits, price is a cost.
    pub fn polarity(&self) -> Polarity {
        match self {
            Criterion::Price => Polarity::Cost,
            _ => Polarity::Benefit,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Cpu => "CPU",
            Criterion::Ram => "RAM",
            Criterion::DiskIo => "Disk I/O",
            Criterion::Price => "Price",
        }
    }

    /// Unit of the raw value.
    pub fn unit(&self) -> &'static str {
        match self {
            Criterion::Cpu => "cores",
            Criterion::Ram => "GB",
            Criterion::DiskIo => "MB/s",
            Criterion::Price => "USD/month",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_are_in_column_order() {
        for (i, criterion) in Criterion::ALL.iter().enumerate() {
            assert_eq!(criterion.index(), i);
        }
    }

    #[test]
    fn only_price_is_a_cost() {
        assert_eq!(Criterion::Cpu.polarity(), Polarity::Benefit);
        assert_eq!(Criterion::Ram.polarity(), Polarity::Benefit);
        assert_eq!(Criterion::DiskIo.polarity(), Polarity::Benefit);
        assert_eq!(Criterion::Price.polarity(), Polarity::Cost);
    }

    #[test]
    fn criterion_serializes_snake_case() {
        let json = serde_json::to_string(&Criterion::DiskIo).unwrap();
        assert_eq!(json, "\"disk_io\"");
    }
}
