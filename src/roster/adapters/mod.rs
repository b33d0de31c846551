//! Adapter implementations of the driver repository port.

pub mod memory;
pub mod postgres;
