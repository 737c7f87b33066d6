//! Cloud Ranker - Multi-criteria ranking of cloud hosting plans
//!
//! This crate ranks hosting alternatives with TOPSIS over four criteria
//! (CPU, RAM, disk I/O, price), keeps a persistent catalog of alternatives
//! and a bounded history of saved calculations, and serves both over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
