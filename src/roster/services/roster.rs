//! Driver registration, activation, and licence updates.

use crate::realtime::{ChangeEvent, ChangeNotifier, ChangeSubscription, Table};
use crate::roster::{
    domain::{CdlForm, Driver, DriverId, EmailAddress, NewDriver, PersonName, RosterDomainError},
    ports::{DriverRepository, DriverRepositoryError},
};
use crate::session::domain::{AccessError, Role, Session, UserId};
use chrono::{FixedOffset, NaiveDate};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for the "Add Driver" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDriverRequest {
    /// Email as typed.
    pub email: String,
    /// Given name as typed.
    pub first_name: String,
    /// Family name as typed.
    pub last_name: String,
    /// CDL section of the form.
    pub cdl: CdlForm,
    /// Login account to link, if known.
    pub user_id: Option<UserId>,
}

impl NewDriverRequest {
    /// Creates a request for a driver without a licence.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Sets the CDL section.
    #[must_use]
    pub fn with_cdl(mut self, cdl: CdlForm) -> Self {
        self.cdl = cdl;
        self
    }

    /// Links a login account.
    #[must_use]
    pub const fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Service-level errors for roster operations.
#[derive(Debug, Error)]
pub enum RosterServiceError {
    /// Form validation failed.
    #[error(transparent)]
    Domain(#[from] RosterDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DriverRepositoryError),
    /// The session may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Result type for roster service operations.
pub type RosterServiceResult<T> = Result<T, RosterServiceError>;

/// Dispatcher-only management of the driver roster.
#[derive(Clone)]
pub struct DriverRosterService<R, C>
where
    R: DriverRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    notifier: ChangeNotifier,
    offset: FixedOffset,
}

impl<R, C> DriverRosterService<R, C>
where
    R: DriverRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new roster service.
    ///
    /// `offset` decides which calendar day counts as today for licence
    /// expiry checks.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        clock: Arc<C>,
        notifier: ChangeNotifier,
        offset: FixedOffset,
    ) -> Self {
        Self {
            repository,
            clock,
            notifier,
            offset,
        }
    }

    /// Lists drivers newest first, optionally leaving out inactive ones.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Access`] for non-dispatchers or
    /// [`RosterServiceError::Repository`] when the lookup fails.
    pub async fn list(
        &self,
        session: &Session,
        hide_inactive: bool,
    ) -> RosterServiceResult<Vec<Driver>> {
        session.require_role(Role::Dispatcher)?;
        let mut drivers = self.repository.list().await?;
        if hide_inactive {
            drivers.retain(Driver::is_active);
        }
        Ok(drivers)
    }

    /// Registers an active driver.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Access`] for non-dispatchers,
    /// [`RosterServiceError::Domain`] for the first invalid field, or
    /// [`RosterServiceError::Repository`] when the email is taken.
    pub async fn create(
        &self,
        session: &Session,
        request: NewDriverRequest,
    ) -> RosterServiceResult<Driver> {
        session.require_role(Role::Dispatcher)?;
        let NewDriverRequest {
            email,
            first_name,
            last_name,
            cdl,
            user_id,
        } = request;

        let first = PersonName::new(&first_name, "first name")?;
        let last = PersonName::new(&last_name, "last name")?;
        let address = EmailAddress::new(email)?;
        let licence = cdl.validate(self.today())?;

        let driver = Driver::new(
            NewDriver {
                user_id,
                email: address,
                first_name: first,
                last_name: last,
                cdl: licence,
            },
            &*self.clock,
        );
        self.repository.store(&driver).await?;
        self.notifier.publish(ChangeEvent::inserted(Table::Drivers));
        tracing::info!(driver_id = %driver.id(), email = %driver.email(), "driver registered");
        Ok(driver)
    }

    /// Moves a driver on or off the active roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Access`] for non-dispatchers or
    /// [`RosterServiceError::Repository`] when the driver is unknown or
    /// persistence fails.
    pub async fn toggle_active(
        &self,
        session: &Session,
        id: DriverId,
    ) -> RosterServiceResult<Driver> {
        session.require_role(Role::Dispatcher)?;
        let mut driver = self.load(id).await?;
        let active = driver.toggle_active(&*self.clock);
        self.save(&driver).await?;
        tracing::info!(driver_id = %id, active, "driver status changed");
        Ok(driver)
    }

    /// Replaces a driver's licence details from the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`RosterServiceError::Access`] for non-dispatchers,
    /// [`RosterServiceError::Domain`] when the form is invalid, or
    /// [`RosterServiceError::Repository`] when the driver is unknown or
    /// persistence fails.
    pub async fn update_cdl(
        &self,
        session: &Session,
        id: DriverId,
        form: &CdlForm,
    ) -> RosterServiceResult<Driver> {
        session.require_role(Role::Dispatcher)?;
        let licence = form.validate(self.today())?;
        let mut driver = self.load(id).await?;
        driver.set_cdl(licence, &*self.clock);
        self.save(&driver).await?;
        tracing::info!(driver_id = %id, has_cdl = driver.has_cdl(), "driver licence updated");
        Ok(driver)
    }

    /// Subscribes to roster changes.
    #[must_use]
    pub fn subscribe(&self) -> ChangeSubscription {
        self.notifier.subscribe([Table::Drivers])
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().with_timezone(&self.offset).date_naive()
    }

    async fn load(&self, id: DriverId) -> RosterServiceResult<Driver> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DriverRepositoryError::NotFound(id))?)
    }

    async fn save(&self, driver: &Driver) -> RosterServiceResult<()> {
        self.repository.update(driver).await?;
        self.notifier.publish(ChangeEvent::updated(Table::Drivers));
        Ok(())
    }
}
