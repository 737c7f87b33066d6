//! Catalog Module - The alternatives being ranked.
//!
//! - `Alternative` - vendor, plan and four criterion levels
//! - `Catalog` - dense 1..=N numbering with renumber-on-remove

mod alternative;
#[allow(clippy::module_inception)]
mod catalog;
mod errors;

pub use alternative::{Alternative, AlternativeDraft, CriterionLevels};
pub use catalog::Catalog;
pub use errors::CatalogError;
