//! Store directory and per-store supply par levels.
//!
//! Stores are identified to people by their department number (`9011`,
//! `9012`, ...). Every store carries one par-level row: the target quantity
//! of each supply category a delivery should bring it up to.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
