//! Identity provider adapters.

pub mod memory;
