//! Adapter implementations of the container count port.

pub mod memory;
pub mod postgres;
