//! Authenticated sessions, roles, and the navigation shell.
//!
//! Authentication itself belongs to the hosted backend. This module models
//! what the client does with the result: which role the session carries,
//! which pages it may open, and where an unauthenticated visitor is sent.
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
