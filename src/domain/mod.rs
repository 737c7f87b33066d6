//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (criteria, levels, IDs, errors)
//! - `analysis` - Level codec, weights and the TOPSIS engine (pure, no I/O)
//! - `catalog` - Hosting alternatives and the dense-id catalog aggregate
//! - `history` - Saved calculation snapshots and the bounded ledger

pub mod analysis;
pub mod catalog;
pub mod foundation;
pub mod history;
