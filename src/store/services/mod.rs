//! Application services for the store directory and par levels.

mod directory;
mod par_levels;

pub use directory::{SeedReport, StoreDirectoryService};
pub use par_levels::ParLevelService;

use crate::session::domain::AccessError;
use crate::store::{domain::StoreDomainError, ports::StoreRepositoryError};
use thiserror::Error;

/// Service-level errors for store operations.
#[derive(Debug, Error)]
pub enum StoreServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StoreDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] StoreRepositoryError),
    /// The session may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Result type for store service operations.
pub type StoreServiceResult<T> = Result<T, StoreServiceError>;
