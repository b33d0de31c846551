//! Repository port for per-store par levels.

use super::StoreRepositoryResult;
use crate::store::domain::{StoreId, StoreParLevels};
use async_trait::async_trait;

/// Par level persistence contract.
#[async_trait]
pub trait ParLevelRepository: Send + Sync {
    /// Stores par levels for a store that has none yet.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreRepositoryError::DuplicateParLevels`] when the
    /// store already has par levels.
    async fn store(&self, levels: &StoreParLevels) -> StoreRepositoryResult<()>;

    /// Persists changed levels. The last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreRepositoryError::NotFound`] when the store has
    /// no par levels.
    async fn update(&self, levels: &StoreParLevels) -> StoreRepositoryResult<()>;

    /// Finds the par levels of a store.
    async fn find_by_store(&self, store_id: StoreId)
    -> StoreRepositoryResult<Option<StoreParLevels>>;

    /// Returns every store's par levels ordered by department number.
    async fn list(&self) -> StoreRepositoryResult<Vec<StoreParLevels>>;
}
