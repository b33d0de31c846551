//! Persistence adapters for the store directory and par levels.
//!
//! - [`memory`]: thread-safe in-memory storage for tests
//! - [`postgres`]: `PostgreSQL` persistence using Diesel

pub mod memory;
pub mod postgres;
