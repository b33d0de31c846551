//! Adapter implementations of the delivery run port.

pub mod memory;
pub mod postgres;
