//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! # Components
//!
//! - `LevelCodec` - 1-5 level ↔ raw value conversion per criterion
//! - `WeightVector` - Validated criterion weights
//! - `DecisionMatrix` - Raw values, one row per alternative
//! - `TopsisEngine` - Normalization, weighting, ideal solutions, distances, ranks
//! - `RankedAlternative` - Alternative joined with its score and rank
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are involved since there is no I/O.

mod errors;
mod level_codec;
mod matrix;
mod ranked_alternative;
mod topsis;
mod weights;

pub use errors::AnalysisError;
pub use level_codec::{LevelBand, LevelCodec};
pub use matrix::{CriterionRow, DecisionMatrix};
pub use ranked_alternative::RankedAlternative;
pub use topsis::{TopsisEngine, TopsisResult, SCORE_TIE_EPSILON};
pub use weights::{WeightVector, WEIGHT_SUM_TOLERANCE};
