//! Repository port for the driver roster.

use crate::db::BlockingError;
use crate::roster::domain::{Driver, DriverId, EmailAddress};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for driver repository operations.
pub type DriverRepositoryResult<T> = Result<T, DriverRepositoryError>;

/// Driver persistence contract.
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Stores a new driver.
    ///
    /// # Errors
    ///
    /// Returns [`DriverRepositoryError::DuplicateDriver`] when the
    /// identifier exists or [`DriverRepositoryError::DuplicateEmail`] when
    /// another driver has the email.
    async fn store(&self, driver: &Driver) -> DriverRepositoryResult<()>;

    /// Persists changes to an existing driver.
    ///
    /// # Errors
    ///
    /// Returns [`DriverRepositoryError::NotFound`] when the driver does not
    /// exist.
    async fn update(&self, driver: &Driver) -> DriverRepositoryResult<()>;

    /// Finds a driver by identifier.
    ///
    /// Returns `None` when the driver does not exist.
    async fn find_by_id(&self, id: DriverId) -> DriverRepositoryResult<Option<Driver>>;

    /// Returns every driver, newest first.
    async fn list(&self) -> DriverRepositoryResult<Vec<Driver>>;
}

/// Errors returned by driver repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DriverRepositoryError {
    /// A driver with the same identifier already exists.
    #[error("duplicate driver identifier: {0}")]
    DuplicateDriver(DriverId),

    /// A driver with the same email already exists.
    #[error("a driver with email {0} already exists")]
    DuplicateEmail(EmailAddress),

    /// The driver was not found.
    #[error("driver not found: {0}")]
    NotFound(DriverId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DriverRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for DriverRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
