//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - File and in-memory persistence for the catalog and history
//! - `http` - axum REST API

pub mod http;
pub mod storage;
