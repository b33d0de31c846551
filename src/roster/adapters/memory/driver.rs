//! In-memory driver roster.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::roster::{
    domain::{Driver, DriverId, EmailAddress},
    ports::{DriverRepository, DriverRepositoryError, DriverRepositoryResult},
};

/// Thread-safe in-memory driver repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDriverRepository {
    state: Arc<RwLock<InMemoryDriverState>>,
}

#[derive(Debug, Default)]
struct InMemoryDriverState {
    drivers: HashMap<DriverId, Driver>,
    email_index: HashMap<EmailAddress, DriverId>,
}

impl InMemoryDriverRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> DriverRepositoryError {
    DriverRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn store(&self, driver: &Driver) -> DriverRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.drivers.contains_key(&driver.id()) {
            return Err(DriverRepositoryError::DuplicateDriver(driver.id()));
        }
        if state.email_index.contains_key(driver.email()) {
            return Err(DriverRepositoryError::DuplicateEmail(driver.email().clone()));
        }
        state.email_index.insert(driver.email().clone(), driver.id());
        state.drivers.insert(driver.id(), driver.clone());
        Ok(())
    }

    async fn update(&self, driver: &Driver) -> DriverRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .drivers
            .get_mut(&driver.id())
            .ok_or(DriverRepositoryError::NotFound(driver.id()))?;
        *slot = driver.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: DriverId) -> DriverRepositoryResult<Option<Driver>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.drivers.get(&id).cloned())
    }

    async fn list(&self) -> DriverRepositoryResult<Vec<Driver>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut drivers: Vec<Driver> = state.drivers.values().cloned().collect();
        drivers.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(drivers)
    }
}
