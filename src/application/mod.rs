//! Application layer - Stores and command handlers.
//!
//! Stores own the mutable state (catalog and history) and persist it through
//! ports; handlers orchestrate domain operations on top of them.

pub mod handlers;
pub mod stores;

pub use handlers::{
    CalculateRankingCommand, CalculateRankingHandler, CriterionSummary, RankingReport,
    SaveCalculationCommand, SaveCalculationHandler,
};
pub use stores::{AlternativeStore, HistoryStore};
