//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - The record store over model tables
//! - The schema inspector used by migrations

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlRecordStore, MySqlSchemaInspector};
