//! Port contracts for the store directory and par levels.
//!
//! Ports define infrastructure-agnostic interfaces used by store services.

pub mod par_level;
pub mod store;

pub use par_level::ParLevelRepository;
pub use store::{StoreRepository, StoreRepositoryError, StoreRepositoryResult};
