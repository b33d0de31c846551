//! In-memory par level table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::store::{
    domain::{StoreId, StoreParLevels},
    ports::{ParLevelRepository, StoreRepositoryError, StoreRepositoryResult},
};

/// Thread-safe in-memory par level repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParLevelRepository {
    levels: Arc<RwLock<HashMap<StoreId, StoreParLevels>>>,
}

impl InMemoryParLevelRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> StoreRepositoryError {
    StoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ParLevelRepository for InMemoryParLevelRepository {
    async fn store(&self, levels: &StoreParLevels) -> StoreRepositoryResult<()> {
        let mut table = self.levels.write().map_err(lock_error)?;
        if table.contains_key(&levels.store_id()) {
            return Err(StoreRepositoryError::DuplicateParLevels(levels.store_id()));
        }
        table.insert(levels.store_id(), levels.clone());
        Ok(())
    }

    async fn update(&self, levels: &StoreParLevels) -> StoreRepositoryResult<()> {
        let mut table = self.levels.write().map_err(lock_error)?;
        let slot = table
            .get_mut(&levels.store_id())
            .ok_or(StoreRepositoryError::NotFound(levels.store_id()))?;
        *slot = levels.clone();
        Ok(())
    }

    async fn find_by_store(
        &self,
        store_id: StoreId,
    ) -> StoreRepositoryResult<Option<StoreParLevels>> {
        let table = self.levels.read().map_err(lock_error)?;
        Ok(table.get(&store_id).cloned())
    }

    async fn list(&self) -> StoreRepositoryResult<Vec<StoreParLevels>> {
        let table = self.levels.read().map_err(lock_error)?;
        let mut rows: Vec<StoreParLevels> = table.values().cloned().collect();
        rows.sort_by(|a, b| a.department_number().cmp(b.department_number()));
        Ok(rows)
    }
}
