//! In-memory container count table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::container::{
    domain::ContainerCount,
    ports::{
        ContainerCountRepository, ContainerCountRepositoryError, ContainerCountRepositoryResult,
    },
};

/// Thread-safe in-memory container count repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContainerCountRepository {
    counts: Arc<RwLock<Vec<ContainerCount>>>,
}

impl InMemoryContainerCountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ContainerCountRepositoryError {
    ContainerCountRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn within(count: &ContainerCount, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    (start..=end).contains(&count.created_at())
}

#[async_trait]
impl ContainerCountRepository for InMemoryContainerCountRepository {
    async fn store(&self, count: &ContainerCount) -> ContainerCountRepositoryResult<()> {
        let mut counts = self.counts.write().map_err(lock_error)?;
        if counts.iter().any(|existing| existing.id() == count.id()) {
            return Err(ContainerCountRepositoryError::DuplicateCount(count.id()));
        }
        counts.push(count.clone());
        Ok(())
    }

    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ContainerCountRepositoryResult<Vec<ContainerCount>> {
        let counts = self.counts.read().map_err(lock_error)?;
        let mut listed: Vec<ContainerCount> = counts
            .iter()
            .filter(|count| within(count, start, end))
            .cloned()
            .collect();
        listed.sort_by_key(ContainerCount::created_at);
        Ok(listed)
    }

    async fn delete_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ContainerCountRepositoryResult<usize> {
        let mut counts = self.counts.write().map_err(lock_error)?;
        let before = counts.len();
        counts.retain(|count| !within(count, start, end));
        Ok(before - counts.len())
    }
}
