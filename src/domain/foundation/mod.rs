//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the ranking domain.

mod criterion;
mod errors;
mod ids;
mod level;
mod timestamp;

pub use criterion::{Criterion, Polarity, CRITERIA_COUNT};
pub use errors::{ErrorCode, ValidationError};
pub use ids::{AlternativeId, HistoryId};
pub use level::Level;
pub use timestamp::Timestamp;
