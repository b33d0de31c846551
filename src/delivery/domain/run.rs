//! Delivery run aggregate and its status progression.

use super::{DeliveryDomainError, RunId, RunStatus, TruckType};
use crate::session::domain::UserId;
use crate::store::domain::{DepartmentNumber, Store, StoreId, StoreName, SupplyQuantities};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for scheduling a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeliveryRun<'a> {
    /// Destination store.
    pub store: &'a Store,
    /// Truck assigned to the run.
    pub truck_type: TruckType,
    /// Supplies loaded for the store.
    pub quantities: SupplyQuantities,
    /// Driver account assigned to the run, if any.
    pub driver: Option<UserId>,
    /// Forklift driver who loads the truck, if known.
    pub fl_driver: Option<String>,
}

/// One truck trip to one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRun {
    id: RunId,
    driver: Option<UserId>,
    store_id: StoreId,
    store_name: StoreName,
    department_number: DepartmentNumber,
    status: RunStatus,
    truck_type: TruckType,
    quantities: SupplyQuantities,
    fl_driver: Option<String>,
    start_time: Option<DateTime<Utc>>,
    preload_time: Option<DateTime<Utc>>,
    depart_time: Option<DateTime<Utc>>,
    complete_time: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDeliveryRun {
    /// Persisted identifier.
    pub id: RunId,
    /// Persisted driver account.
    pub driver: Option<UserId>,
    /// Persisted destination store.
    pub store_id: StoreId,
    /// Denormalized store name.
    pub store_name: StoreName,
    /// Denormalized department number.
    pub department_number: DepartmentNumber,
    /// Persisted status.
    pub status: RunStatus,
    /// Persisted truck type.
    pub truck_type: TruckType,
    /// Persisted supply quantities.
    pub quantities: SupplyQuantities,
    /// Persisted forklift driver.
    pub fl_driver: Option<String>,
    /// When loading started.
    pub start_time: Option<DateTime<Utc>>,
    /// When loading finished.
    pub preload_time: Option<DateTime<Utc>>,
    /// When the truck left.
    pub depart_time: Option<DateTime<Utc>>,
    /// When the delivery finished.
    pub complete_time: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl DeliveryRun {
    /// Schedules a new pending run.
    #[must_use]
    pub fn new(request: NewDeliveryRun<'_>, clock: &impl Clock) -> Self {
        let NewDeliveryRun {
            store,
            truck_type,
            quantities,
            driver,
            fl_driver,
        } = request;
        let timestamp = clock.utc();
        Self {
            id: RunId::new(),
            driver,
            store_id: store.id(),
            store_name: store.name().clone(),
            department_number: store.department_number().clone(),
            status: RunStatus::Pending,
            truck_type,
            quantities,
            fl_driver: fl_driver.filter(|name| !name.trim().is_empty()),
            start_time: None,
            preload_time: None,
            depart_time: None,
            complete_time: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a run from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDeliveryRun) -> Self {
        Self {
            id: data.id,
            driver: data.driver,
            store_id: data.store_id,
            store_name: data.store_name,
            department_number: data.department_number,
            status: data.status,
            truck_type: data.truck_type,
            quantities: data.quantities,
            fl_driver: data.fl_driver,
            start_time: data.start_time,
            preload_time: data.preload_time,
            depart_time: data.depart_time,
            complete_time: data.complete_time,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn id(&self) -> RunId {
        self.id
    }

    /// Returns the assigned driver account.
    #[must_use]
    pub const fn driver(&self) -> Option<UserId> {
        self.driver
    }

    /// Returns the destination store.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }

    /// Returns the destination store name.
    #[must_use]
    pub const fn store_name(&self) -> &StoreName {
        &self.store_name
    }

    /// Returns the destination department number.
    #[must_use]
    pub const fn department_number(&self) -> &DepartmentNumber {
        &self.department_number
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Returns the truck type.
    #[must_use]
    pub const fn truck_type(&self) -> TruckType {
        self.truck_type
    }

    /// Returns the loaded supply quantities.
    #[must_use]
    pub const fn quantities(&self) -> &SupplyQuantities {
        &self.quantities
    }

    /// Returns the forklift driver.
    #[must_use]
    pub fn fl_driver(&self) -> Option<&str> {
        self.fl_driver.as_deref()
    }

    /// Returns when loading started.
    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    /// Returns when loading finished.
    #[must_use]
    pub const fn preload_time(&self) -> Option<DateTime<Utc>> {
        self.preload_time
    }

    /// Returns when the truck left.
    #[must_use]
    pub const fn depart_time(&self) -> Option<DateTime<Utc>> {
        self.depart_time
    }

    /// Returns when the delivery finished.
    #[must_use]
    pub const fn complete_time(&self) -> Option<DateTime<Utc>> {
        self.complete_time
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when `user` is the assigned driver.
    #[must_use]
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.driver == Some(user)
    }

    /// Moves the run to `target`, stamping the matching milestone.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::InvalidTransition`] unless `target` is
    /// the next forward status or a cancellation of a live run.
    pub fn transition_to(
        &mut self,
        target: RunStatus,
        clock: &impl Clock,
    ) -> Result<(), DeliveryDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DeliveryDomainError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        let timestamp = clock.utc();
        match target {
            RunStatus::Loading => self.start_time = Some(timestamp),
            RunStatus::Preloaded => self.preload_time = Some(timestamp),
            RunStatus::InTransit => self.depart_time = Some(timestamp),
            RunStatus::Complete => self.complete_time = Some(timestamp),
            RunStatus::Pending | RunStatus::Cancelled => {}
        }
        self.status = target;
        self.updated_at = timestamp;
        Ok(())
    }

    /// Performs the driver's forward action and returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryDomainError::InvalidTransition`] when the run is
    /// already complete or cancelled.
    pub fn advance(&mut self, clock: &impl Clock) -> Result<RunStatus, DeliveryDomainError> {
        let target = self
            .status
            .next()
            .ok_or(DeliveryDomainError::InvalidTransition {
                from: self.status,
                to: self.status,
            })?;
        self.transition_to(target, clock)?;
        Ok(target)
    }

    /// Assigns or clears the driver account.
    pub fn assign_driver(&mut self, driver: Option<UserId>, clock: &impl Clock) {
        self.driver = driver;
        self.updated_at = clock.utc();
    }
}
