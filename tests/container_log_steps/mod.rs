//! Step definitions for daily container log scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
