//! In-memory delivery run table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::delivery::{
    domain::{DeliveryRun, RunId},
    ports::{DeliveryRunRepository, DeliveryRunRepositoryError, DeliveryRunRepositoryResult},
};
use crate::session::domain::UserId;

/// Thread-safe in-memory delivery run repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeliveryRunRepository {
    runs: Arc<RwLock<HashMap<RunId, DeliveryRun>>>,
}

impl InMemoryDeliveryRunRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> DeliveryRunRepositoryError {
    DeliveryRunRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DeliveryRunRepository for InMemoryDeliveryRunRepository {
    async fn store(&self, run: &DeliveryRun) -> DeliveryRunRepositoryResult<()> {
        let mut runs = self.runs.write().map_err(lock_error)?;
        if runs.contains_key(&run.id()) {
            return Err(DeliveryRunRepositoryError::DuplicateRun(run.id()));
        }
        runs.insert(run.id(), run.clone());
        Ok(())
    }

    async fn update(&self, run: &DeliveryRun) -> DeliveryRunRepositoryResult<()> {
        let mut runs = self.runs.write().map_err(lock_error)?;
        let slot = runs
            .get_mut(&run.id())
            .ok_or(DeliveryRunRepositoryError::NotFound(run.id()))?;
        *slot = run.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: RunId) -> DeliveryRunRepositoryResult<Option<DeliveryRun>> {
        let runs = self.runs.read().map_err(lock_error)?;
        Ok(runs.get(&id).cloned())
    }

    async fn list_all(&self) -> DeliveryRunRepositoryResult<Vec<DeliveryRun>> {
        let runs = self.runs.read().map_err(lock_error)?;
        let mut listed: Vec<DeliveryRun> = runs.values().cloned().collect();
        listed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(listed)
    }

    async fn list_for_driver(
        &self,
        driver: UserId,
    ) -> DeliveryRunRepositoryResult<Vec<DeliveryRun>> {
        let runs = self.runs.read().map_err(lock_error)?;
        let mut listed: Vec<DeliveryRun> = runs
            .values()
            .filter(|run| run.is_assigned_to(driver))
            .cloned()
            .collect();
        listed.sort_by_key(DeliveryRun::created_at);
        Ok(listed)
    }
}
