//! Par level grid reads and edits.

use super::StoreServiceResult;
use crate::realtime::{ChangeEvent, ChangeNotifier, ChangeSubscription, Table};
use crate::session::domain::{Role, Session};
use crate::store::{
    domain::{ParLevelEdit, StoreId, StoreParLevels, SupplyCategory, parse_par_level},
    ports::{ParLevelRepository, StoreRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;

/// Reads and edits the par level grid.
#[derive(Clone)]
pub struct ParLevelService<P, C>
where
    P: ParLevelRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<P>,
    clock: Arc<C>,
    notifier: ChangeNotifier,
}

impl<P, C> ParLevelService<P, C>
where
    P: ParLevelRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new par level service.
    #[must_use]
    pub const fn new(repository: Arc<P>, clock: Arc<C>, notifier: ChangeNotifier) -> Self {
        Self {
            repository,
            clock,
            notifier,
        }
    }

    /// Lists every store's par levels ordered by department number.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> StoreServiceResult<Vec<StoreParLevels>> {
        Ok(self.repository.list().await?)
    }

    /// Starts editing one cell of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`StoreRepositoryError::NotFound`] when the store has no par
    /// levels.
    pub async fn begin_edit(
        &self,
        store_id: StoreId,
        category: SupplyCategory,
    ) -> StoreServiceResult<ParLevelEdit> {
        let levels = self.load(store_id).await?;
        Ok(ParLevelEdit::begin(&levels, category))
    }

    /// Sets one par level from the value typed into the grid.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreServiceError::Access`] for non-dispatchers,
    /// [`super::StoreServiceError::Domain`] when the value is not a whole
    /// number, or [`super::StoreServiceError::Repository`] when the store is
    /// unknown or persistence fails.
    pub async fn update_level(
        &self,
        session: &Session,
        store_id: StoreId,
        category: SupplyCategory,
        raw_value: &str,
    ) -> StoreServiceResult<StoreParLevels> {
        session.require_role(Role::Dispatcher)?;
        let value = parse_par_level(raw_value)?;
        let mut levels = self.load(store_id).await?;
        levels.set_level(category, value, &*self.clock);
        self.repository.update(&levels).await?;
        self.notifier
            .publish(ChangeEvent::updated(Table::StoreSupplies));
        tracing::info!(
            store_id = %store_id,
            category = category.as_str(),
            value,
            "par level updated"
        );
        Ok(levels)
    }

    /// Saves an edit started with [`Self::begin_edit`].
    ///
    /// # Errors
    ///
    /// As for [`Self::update_level`].
    pub async fn save_edit(
        &self,
        session: &Session,
        edit: &ParLevelEdit,
    ) -> StoreServiceResult<StoreParLevels> {
        self.update_level(session, edit.store_id(), edit.category(), edit.value())
            .await
    }

    /// Subscribes to par level changes.
    #[must_use]
    pub fn subscribe(&self) -> ChangeSubscription {
        self.notifier.subscribe([Table::StoreSupplies])
    }

    async fn load(&self, store_id: StoreId) -> StoreServiceResult<StoreParLevels> {
        Ok(self
            .repository
            .find_by_store(store_id)
            .await?
            .ok_or(StoreRepositoryError::NotFound(store_id))?)
    }
}
