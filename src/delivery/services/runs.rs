//! Delivery run scheduling, progression, and the dispatch board.

use crate::delivery::{
    domain::{
        DeliveryDomainError, DeliveryRun, DispatchBoard, NewDeliveryRun, RunFilter, RunId,
        RunStatus, TruckType,
    },
    ports::{DeliveryRunRepository, DeliveryRunRepositoryError},
};
use crate::realtime::{ChangeEvent, ChangeNotifier, ChangeSubscription, Table};
use crate::session::domain::{AccessError, Role, Session, UserId};
use crate::store::{
    domain::{StoreId, SupplyQuantities},
    ports::{StoreRepository, StoreRepositoryError},
};
use chrono::FixedOffset;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for scheduling a delivery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRunRequest {
    store_id: StoreId,
    truck_type: TruckType,
    quantities: SupplyQuantities,
    driver: Option<UserId>,
    fl_driver: Option<String>,
}

impl CreateRunRequest {
    /// Creates a request with no supplies, driver, or forklift driver.
    #[must_use]
    pub fn new(store_id: StoreId, truck_type: TruckType) -> Self {
        Self {
            store_id,
            truck_type,
            quantities: SupplyQuantities::default(),
            driver: None,
            fl_driver: None,
        }
    }

    /// Sets the supplies to load.
    #[must_use]
    pub const fn with_quantities(mut self, quantities: SupplyQuantities) -> Self {
        self.quantities = quantities;
        self
    }

    /// Assigns the run to a driver account.
    #[must_use]
    pub const fn with_driver(mut self, driver: UserId) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Records the forklift driver.
    #[must_use]
    pub fn with_fl_driver(mut self, name: impl Into<String>) -> Self {
        self.fl_driver = Some(name.into());
        self
    }
}

/// Service-level errors for delivery run operations.
#[derive(Debug, Error)]
pub enum DeliveryServiceError {
    /// The requested status change is not allowed.
    #[error(transparent)]
    Domain(#[from] DeliveryDomainError),
    /// Run persistence failed.
    #[error(transparent)]
    Repository(#[from] DeliveryRunRepositoryError),
    /// Store lookup failed.
    #[error(transparent)]
    Store(#[from] StoreRepositoryError),
    /// The session may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The run is assigned to someone else.
    #[error("delivery run {0} is not assigned to this driver")]
    NotAssigned(RunId),
}

/// Result type for delivery run service operations.
pub type DeliveryServiceResult<T> = Result<T, DeliveryServiceError>;

/// Schedules runs and moves them through their lifecycle.
#[derive(Clone)]
pub struct DeliveryRunService<R, S, C>
where
    R: DeliveryRunRepository,
    S: StoreRepository,
    C: Clock + Send + Sync,
{
    runs: Arc<R>,
    stores: Arc<S>,
    clock: Arc<C>,
    notifier: ChangeNotifier,
    offset: FixedOffset,
}

impl<R, S, C> DeliveryRunService<R, S, C>
where
    R: DeliveryRunRepository,
    S: StoreRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new delivery run service.
    ///
    /// `offset` is the site's local time, used to place runs in time slots.
    #[must_use]
    pub const fn new(
        runs: Arc<R>,
        stores: Arc<S>,
        clock: Arc<C>,
        notifier: ChangeNotifier,
        offset: FixedOffset,
    ) -> Self {
        Self {
            runs,
            stores,
            clock,
            notifier,
            offset,
        }
    }

    /// Schedules a pending run for a store.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryServiceError::Access`] for non-dispatchers,
    /// [`DeliveryServiceError::Store`] when the store is unknown, or
    /// [`DeliveryServiceError::Repository`] when persistence fails.
    pub async fn create_run(
        &self,
        session: &Session,
        request: CreateRunRequest,
    ) -> DeliveryServiceResult<DeliveryRun> {
        session.require_role(Role::Dispatcher)?;
        let CreateRunRequest {
            store_id,
            truck_type,
            quantities,
            driver,
            fl_driver,
        } = request;
        let store = self
            .stores
            .find_by_id(store_id)
            .await?
            .ok_or(StoreRepositoryError::NotFound(store_id))?;

        let run = DeliveryRun::new(
            NewDeliveryRun {
                store: &store,
                truck_type,
                quantities,
                driver,
                fl_driver,
            },
            &*self.clock,
        );
        self.runs.store(&run).await?;
        self.notifier
            .publish(ChangeEvent::inserted(Table::ActiveDeliveryRuns));
        tracing::info!(
            run_id = %run.id(),
            department = %run.department_number(),
            truck_type = %run.truck_type(),
            "delivery run scheduled"
        );
        Ok(run)
    }

    /// Builds the dispatch board for `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryServiceError::Access`] for non-dispatchers or
    /// [`DeliveryServiceError::Repository`] when the lookup fails.
    pub async fn dispatch_board(
        &self,
        session: &Session,
        filter: RunFilter,
    ) -> DeliveryServiceResult<DispatchBoard> {
        session.require_role(Role::Dispatcher)?;
        let runs = self.runs.list_all().await?;
        Ok(DispatchBoard::build(runs, filter, self.offset))
    }

    /// Lists the runs assigned to the signed-in user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryServiceError::Repository`] when the lookup fails.
    pub async fn driver_runs(&self, session: &Session) -> DeliveryServiceResult<Vec<DeliveryRun>> {
        Ok(self.runs.list_for_driver(session.user_id()).await?)
    }

    /// Performs the forward action on a run.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryServiceError::NotAssigned`] when a driver acts on
    /// someone else's run, [`DeliveryServiceError::Domain`] when the run is
    /// finished, or [`DeliveryServiceError::Repository`] when the run is
    /// unknown or persistence fails.
    pub async fn advance(
        &self,
        session: &Session,
        run_id: RunId,
    ) -> DeliveryServiceResult<DeliveryRun> {
        let mut run = self.load(run_id).await?;
        if !session.is_dispatcher() && !run.is_assigned_to(session.user_id()) {
            tracing::warn!(run_id = %run_id, user_id = %session.user_id(), "advance rejected");
            return Err(DeliveryServiceError::NotAssigned(run_id));
        }
        let from = run.status();
        let to = run.advance(&*self.clock)?;
        self.save(&run).await?;
        tracing::info!(run_id = %run_id, %from, %to, "delivery run advanced");
        Ok(run)
    }

    /// Cancels a run that has not finished.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryServiceError::Access`] for non-dispatchers,
    /// [`DeliveryServiceError::Domain`] when the run is already finished, or
    /// [`DeliveryServiceError::Repository`] when persistence fails.
    pub async fn cancel(
        &self,
        session: &Session,
        run_id: RunId,
    ) -> DeliveryServiceResult<DeliveryRun> {
        session.require_role(Role::Dispatcher)?;
        let mut run = self.load(run_id).await?;
        run.transition_to(RunStatus::Cancelled, &*self.clock)?;
        self.save(&run).await?;
        tracing::info!(run_id = %run_id, "delivery run cancelled");
        Ok(run)
    }

    /// Assigns or clears the driver of a run.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryServiceError::Access`] for non-dispatchers or
    /// [`DeliveryServiceError::Repository`] when persistence fails.
    pub async fn assign_driver(
        &self,
        session: &Session,
        run_id: RunId,
        driver: Option<UserId>,
    ) -> DeliveryServiceResult<DeliveryRun> {
        session.require_role(Role::Dispatcher)?;
        let mut run = self.load(run_id).await?;
        run.assign_driver(driver, &*self.clock);
        self.save(&run).await?;
        tracing::info!(run_id = %run_id, driver = ?driver, "delivery run reassigned");
        Ok(run)
    }

    /// Subscribes to delivery run changes.
    #[must_use]
    pub fn subscribe(&self) -> ChangeSubscription {
        self.notifier.subscribe([Table::ActiveDeliveryRuns])
    }

    async fn load(&self, run_id: RunId) -> DeliveryServiceResult<DeliveryRun> {
        Ok(self
            .runs
            .find_by_id(run_id)
            .await?
            .ok_or(DeliveryRunRepositoryError::NotFound(run_id))?)
    }

    async fn save(&self, run: &DeliveryRun) -> DeliveryServiceResult<()> {
        self.runs.update(run).await?;
        self.notifier
            .publish(ChangeEvent::updated(Table::ActiveDeliveryRuns));
        Ok(())
    }
}
