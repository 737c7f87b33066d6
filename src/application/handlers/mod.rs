//! Command handlers.

mod calculate_ranking;
mod save_calculation;

pub use calculate_ranking::{
    CalculateRankingCommand, CalculateRankingHandler, CriterionSummary, RankingReport,
};
pub use save_calculation::{SaveCalculationCommand, SaveCalculationHandler};
