//! In-memory store directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::store::{
    domain::{DepartmentNumber, Store, StoreId},
    ports::{StoreRepository, StoreRepositoryError, StoreRepositoryResult},
};

/// Thread-safe in-memory store repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreRepository {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    stores: HashMap<StoreId, Store>,
    department_index: HashMap<DepartmentNumber, StoreId>,
}

impl InMemoryStoreRepository {
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
impl StoreRepository for InMemoryStoreRepository {
    async fn store(&self, store: &Store) -> StoreRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.stores.contains_key(&store.id()) {
            return Err(StoreRepositoryError::DuplicateStore(store.id()));
        }
        if state
            .department_index
            .contains_key(store.department_number())
        {
            return Err(StoreRepositoryError::DuplicateDepartment(
                store.department_number().clone(),
            ));
        }
        state
            .department_index
            .insert(store.department_number().clone(), store.id());
        state.stores.insert(store.id(), store.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: StoreId) -> StoreRepositoryResult<Option<Store>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.stores.get(&id).cloned())
    }

    async fn find_by_department(
        &self,
        department_number: &DepartmentNumber,
    ) -> StoreRepositoryResult<Option<Store>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .department_index
            .get(department_number)
            .and_then(|id| state.stores.get(id))
            .cloned())
    }

    async fn list(&self) -> StoreRepositoryResult<Vec<Store>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut stores: Vec<Store> = state.stores.values().cloned().collect();
        stores.sort_by(|a, b| a.department_number().cmp(b.department_number()));
        Ok(stores)
    }
}
