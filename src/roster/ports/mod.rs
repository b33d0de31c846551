//! Port contracts for driver persistence.

pub mod repository;

pub use repository::{DriverRepository, DriverRepositoryError, DriverRepositoryResult};
