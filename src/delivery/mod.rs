//! Delivery runs and the dispatch board.
//!
//! A delivery run is one truck trip to one store. Drivers move their runs
//! forward one status at a time from the driver dashboard; dispatchers see
//! every run on the dispatch board, grouped by the hour the run started.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
