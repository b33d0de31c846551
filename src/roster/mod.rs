//! Driver roster management.
//!
//! Dispatchers register drivers, mark them inactive when they leave, and
//! keep commercial driver's licence details current.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
