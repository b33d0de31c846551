//! Repository port for daily container counts.

use crate::container::domain::{ContainerCount, ContainerCountId};
use crate::db::BlockingError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for container count repository operations.
pub type ContainerCountRepositoryResult<T> = Result<T, ContainerCountRepositoryError>;

/// Container count persistence contract.
///
/// Range bounds are inclusive on both ends.
#[async_trait]
pub trait ContainerCountRepository: Send + Sync {
    /// Stores a new submission.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerCountRepositoryError::DuplicateCount`] when the
    /// identifier already exists.
    async fn store(&self, count: &ContainerCount) -> ContainerCountRepositoryResult<()>;

    /// Returns submissions created between `start` and `end`, oldest first.
    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ContainerCountRepositoryResult<Vec<ContainerCount>>;

    /// Deletes submissions created between `start` and `end`.
    ///
    /// Returns the number of rows removed.
    async fn delete_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ContainerCountRepositoryResult<usize>;
}

/// Errors returned by container count repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ContainerCountRepositoryError {
    /// A submission with the same identifier already exists.
    #[error("duplicate container count identifier: {0}")]
    DuplicateCount(ContainerCountId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContainerCountRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for ContainerCountRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
