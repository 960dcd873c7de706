//! Filtergraph - inspect and normalize filter-graph expressions
//!
//! This library crate exposes the application layer for integration testing.

pub mod config;
pub mod input;
pub mod report;
