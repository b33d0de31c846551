//! Step definitions for delivery run progression scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
