//! Submitted container count.

use super::{ContainerCountId, ContainerMetrics};
use crate::store::domain::{DepartmentNumber, Store, StoreId, StoreName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for recording a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContainerCount<'a> {
    /// Reporting store.
    pub store: &'a Store,
    /// Name of the store opener.
    pub opener_name: String,
    /// When the opener arrived.
    pub arrival_time: DateTime<Utc>,
    /// Reported figures.
    pub metrics: ContainerMetrics,
}

/// One store's container count for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCount {
    id: ContainerCountId,
    store_id: StoreId,
    department_number: DepartmentNumber,
    store_name: StoreName,
    opener_name: String,
    arrival_time: DateTime<Utc>,
    metrics: ContainerMetrics,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedContainerCount {
    /// Persisted identifier.
    pub id: ContainerCountId,
    /// Persisted store.
    pub store_id: StoreId,
    /// Denormalized department number.
    pub department_number: DepartmentNumber,
    /// Denormalized store name.
    pub store_name: StoreName,
    /// Persisted opener name.
    pub opener_name: String,
    /// Persisted arrival time.
    pub arrival_time: DateTime<Utc>,
    /// Persisted figures.
    pub metrics: ContainerMetrics,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

impl ContainerCount {
    /// Records a submission stamped with the current time.
    #[must_use]
    pub fn new(request: NewContainerCount<'_>, clock: &impl Clock) -> Self {
        Self {
            id: ContainerCountId::new(),
            store_id: request.store.id(),
            department_number: request.store.department_number().clone(),
            store_name: request.store.name().clone(),
            opener_name: request.opener_name,
            arrival_time: request.arrival_time,
            metrics: request.metrics,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a submission from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedContainerCount) -> Self {
        Self {
            id: data.id,
            store_id: data.store_id,
            department_number: data.department_number,
            store_name: data.store_name,
            opener_name: data.opener_name,
            arrival_time: data.arrival_time,
            metrics: data.metrics,
            created_at: data.created_at,
        }
    }

    /// Returns the submission identifier.
    #[must_use]
    pub const fn id(&self) -> ContainerCountId {
        self.id
    }

    /// Returns the reporting store.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the reporting store's department number.
    #[must_use]
    pub const fn department_number(&self) -> &DepartmentNumber {
        &self.department_number
    }

    /// Returns the reporting store's name.
    #[must_use]
    pub const fn store_name(&self) -> &StoreName {
        &self.store_name
    }

    /// Returns the opener's name.
    #[must_use]
    pub fn opener_name(&self) -> &str {
        &self.opener_name
    }

    /// Returns when the opener arrived.
    #[must_use]
    pub const fn arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    /// Returns the reported figures.
    #[must_use]
    pub const fn metrics(&self) -> &ContainerMetrics {
        &self.metrics
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
