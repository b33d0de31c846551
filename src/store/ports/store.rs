//! Repository port for the store directory.

use crate::db::BlockingError;
use crate::store::domain::{DepartmentNumber, Store, StoreId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store and par level repository operations.
pub type StoreRepositoryResult<T> = Result<T, StoreRepositoryError>;

/// Store directory persistence contract.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Stores a new store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreRepositoryError::DuplicateStore`] when the identifier
    /// exists or [`StoreRepositoryError::DuplicateDepartment`] when the
    /// department number is taken.
    async fn store(&self, store: &Store) -> StoreRepositoryResult<()>;

    /// Finds a store by identifier.
    ///
    /// Returns `None` when the store does not exist.
    async fn find_by_id(&self, id: StoreId) -> StoreRepositoryResult<Option<Store>>;

    /// Finds a store by department number.
    ///
    /// Returns `None` when no store has the department number.
    async fn find_by_department(
        &self,
        department_number: &DepartmentNumber,
    ) -> StoreRepositoryResult<Option<Store>>;

    /// Returns every store ordered by department number.
    async fn list(&self) -> StoreRepositoryResult<Vec<Store>>;
}

/// Errors returned by store and par level repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreRepositoryError {
    /// A store with the same identifier already exists.
    #[error("duplicate store identifier: {0}")]
    DuplicateStore(StoreId),

    /// A store with the same department number already exists.
    #[error("duplicate department number: {0}")]
    DuplicateDepartment(DepartmentNumber),

    /// Par levels for the store already exist.
    #[error("par levels already exist for store {0}")]
    DuplicateParLevels(StoreId),

    /// The store or its par levels were not found.
    #[error("store not found: {0}")]
    NotFound(StoreId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<BlockingError> for StoreRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}
