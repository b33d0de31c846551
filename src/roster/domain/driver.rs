//! Driver aggregate.

use super::{CdlCredential, DriverId, EmailAddress, PersonName};
use crate::session::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for registering a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    /// Login account, when the driver has one.
    pub user_id: Option<UserId>,
    /// Contact and login email.
    pub email: EmailAddress,
    /// Given name.
    pub first_name: PersonName,
    /// Family name.
    pub last_name: PersonName,
    /// Licence, if the driver holds one.
    pub cdl: Option<CdlCredential>,
}

/// A driver on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    id: DriverId,
    user_id: Option<UserId>,
    email: EmailAddress,
    first_name: PersonName,
    last_name: PersonName,
    cdl: Option<CdlCredential>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDriver {
    /// Persisted identifier.
    pub id: DriverId,
    /// Persisted login account.
    pub user_id: Option<UserId>,
    /// Persisted email.
    pub email: EmailAddress,
    /// Persisted given name.
    pub first_name: PersonName,
    /// Persisted family name.
    pub last_name: PersonName,
    /// Persisted licence.
    pub cdl: Option<CdlCredential>,
    /// Persisted active flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    /// Registers an active driver.
    #[must_use]
    pub fn new(request: NewDriver, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: DriverId::new(),
            user_id: request.user_id,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            cdl: request.cdl,
            is_active: true,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a driver from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDriver) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            cdl: data.cdl,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the driver identifier.
    #[must_use]
    pub const fn id(&self) -> DriverId {
        self.id
    }

    /// Returns the login account.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the given name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Returns the family name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Returns `First Last`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the licence, if any.
    #[must_use]
    pub const fn cdl(&self) -> Option<&CdlCredential> {
        self.cdl.as_ref()
    }

    /// Returns `true` when the driver holds a licence.
    #[must_use]
    pub const fn has_cdl(&self) -> bool {
        self.cdl.is_some()
    }

    /// Returns `true` while the driver is on the active roster.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
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

    /// Flips the active flag and returns the new value.
    pub fn toggle_active(&mut self, clock: &impl Clock) -> bool {
        self.is_active = !self.is_active;
        self.updated_at = clock.utc();
        self.is_active
    }

    /// Replaces the licence details.
    pub fn set_cdl(&mut self, cdl: Option<CdlCredential>, clock: &impl Clock) {
        self.cdl = cdl;
        self.updated_at = clock.utc();
    }
}
