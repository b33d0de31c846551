//! Store directory registration and catalogue seeding.

use super::StoreServiceResult;
use crate::realtime::{ChangeEvent, ChangeNotifier, Table};
use crate::session::domain::{Role, Session};
use crate::store::{
    domain::{
        DepartmentNumber, Store, StoreName, StoreParLevels, SupplyQuantities, default_catalogue,
    },
    ports::{ParLevelRepository, StoreRepository},
};
use mockable::Clock;
use std::sync::Arc;

/// Outcome of [`StoreDirectoryService::seed_catalogue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    /// Stores registered by this run.
    pub added: usize,
    /// Catalogue stores that already existed with par levels.
    pub skipped: usize,
    /// Existing catalogue stores that had no par levels and were given the
    /// catalogue defaults.
    pub repaired: usize,
}

/// Registers stores together with their par level rows.
#[derive(Clone)]
pub struct StoreDirectoryService<S, P, C>
where
    S: StoreRepository,
    P: ParLevelRepository,
    C: Clock + Send + Sync,
{
    stores: Arc<S>,
    levels: Arc<P>,
    clock: Arc<C>,
    notifier: ChangeNotifier,
}

impl<S, P, C> StoreDirectoryService<S, P, C>
where
    S: StoreRepository,
    P: ParLevelRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new store directory service.
    #[must_use]
    pub const fn new(
        stores: Arc<S>,
        levels: Arc<P>,
        clock: Arc<C>,
        notifier: ChangeNotifier,
    ) -> Self {
        Self {
            stores,
            levels,
            clock,
            notifier,
        }
    }

    /// Lists every store ordered by department number.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreServiceError::Repository`] when the lookup fails.
    pub async fn list_stores(&self) -> StoreServiceResult<Vec<Store>> {
        Ok(self.stores.list().await?)
    }

    /// Registers a store with all par levels at zero.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreServiceError::Access`] for non-dispatchers,
    /// [`super::StoreServiceError::Domain`] for invalid input, or
    /// [`super::StoreServiceError::Repository`] when the department number
    /// is taken.
    pub async fn register_store(
        &self,
        session: &Session,
        department_number: &str,
        name: &str,
    ) -> StoreServiceResult<Store> {
        session.require_role(Role::Dispatcher)?;
        let store = Store::new(DepartmentNumber::new(department_number)?, StoreName::new(name)?);
        self.insert(&store, SupplyQuantities::default()).await?;
        tracing::info!(
            store_id = %store.id(),
            department = %store.department_number(),
            "store registered"
        );
        Ok(store)
    }

    /// Registers every catalogue store that is not yet present.
    ///
    /// Stores are matched by department number, so running this twice adds
    /// nothing the second time. A store left without par levels by an
    /// earlier failed run receives the catalogue defaults.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreServiceError::Access`] for non-dispatchers or
    /// the first repository failure.
    pub async fn seed_catalogue(&self, session: &Session) -> StoreServiceResult<SeedReport> {
        session.require_role(Role::Dispatcher)?;
        let mut report = SeedReport::default();
        for entry in default_catalogue() {
            let department = DepartmentNumber::new(entry.department_number)?;
            let Some(existing) = self.stores.find_by_department(&department).await? else {
                let store = Store::new(department, StoreName::new(entry.store_name)?);
                self.insert(&store, entry.levels).await?;
                report.added += 1;
                continue;
            };
            if self.levels.find_by_store(existing.id()).await?.is_some() {
                report.skipped += 1;
                continue;
            }
            self.insert_levels(&existing, entry.levels).await?;
            tracing::warn!(
                store_id = %existing.id(),
                department = %existing.department_number(),
                "restored missing par levels"
            );
            report.repaired += 1;
        }
        tracing::info!(
            added = report.added,
            skipped = report.skipped,
            repaired = report.repaired,
            "store catalogue seeded"
        );
        Ok(report)
    }

    async fn insert(&self, store: &Store, levels: SupplyQuantities) -> StoreServiceResult<()> {
        self.stores.store(store).await?;
        self.notifier.publish(ChangeEvent::inserted(Table::Stores));
        self.insert_levels(store, levels).await
    }

    async fn insert_levels(
        &self,
        store: &Store,
        levels: SupplyQuantities,
    ) -> StoreServiceResult<()> {
        let row = StoreParLevels::new(store, levels, &*self.clock);
        self.levels.store(&row).await?;
        self.notifier
            .publish(ChangeEvent::inserted(Table::StoreSupplies));
        Ok(())
    }
}
