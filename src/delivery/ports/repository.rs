//! Repository port for delivery runs.

use crate::db::BlockingError;
use crate::delivery::domain::{DeliveryRun, RunId};
use crate::session::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for delivery run repository operations.
pub type DeliveryRunRepositoryResult<T> = Result<T, DeliveryRunRepositoryError>;

/// Delivery run persistence contract.
#[async_trait]
pub trait DeliveryRunRepository: Send + Sync {
    /// Stores a new run.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRunRepositoryError::DuplicateRun`] when the
    /// identifier already exists.
    async fn store(&self, run: &DeliveryRun) -> DeliveryRunRepositoryResult<()>;

    /// Persists changes to an existing run. The last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRunRepositoryError::NotFound`] when the run does not
    /// exist.
    async fn update(&self, run: &DeliveryRun) -> DeliveryRunRepositoryResult<()>;

    /// Finds a run by identifier.
    ///
    /// Returns `None` when the run does not exist.
    async fn find_by_id(&self, id: RunId) -> DeliveryRunRepositoryResult<Option<DeliveryRun>>;

    /// Returns every run, newest first.
    async fn list_all(&self) -> DeliveryRunRepositoryResult<Vec<DeliveryRun>>;

    /// Returns the runs assigned to `driver`, oldest first.
    async fn list_for_driver(&self, driver: UserId)
    -> DeliveryRunRepositoryResult<Vec<DeliveryRun>>;
}

/// Errors returned by delivery run repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DeliveryRunRepositoryError {
    /// A run with the same identifier already exists.
    #[error("duplicate delivery run identifier: {0}")]
    DuplicateRun(RunId),

    /// The run was not found.
    #[error("delivery run not found: {0}")]
    NotFound(RunId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeliveryRunRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for DeliveryRunRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
