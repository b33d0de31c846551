//! Commercial driver's licence details.

use super::RosterDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format of the expiration field.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A licence number with its expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdlCredential {
    number: String,
    expires_on: NaiveDate,
}

impl CdlCredential {
    /// Reconstructs a credential from stored parts.
    ///
    /// Expiry is not checked; stored licences may have lapsed since.
    #[must_use]
    pub const fn from_parts(number: String, expires_on: NaiveDate) -> Self {
        Self { number, expires_on }
    }

    /// Returns the licence number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the expiration date.
    #[must_use]
    pub const fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }

    /// Returns `true` once `today` has reached the expiration date.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on <= today
    }
}

/// The CDL section of the driver form, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CdlForm {
    /// Whether the "Has CDL" box is ticked.
    pub has_cdl: bool,
    /// Licence number as typed.
    pub number: String,
    /// Expiration date as typed, `YYYY-MM-DD`.
    pub expiration: String,
}

impl CdlForm {
    /// A form with the CDL box ticked.
    #[must_use]
    pub fn with_licence(number: impl Into<String>, expiration: impl Into<String>) -> Self {
        Self {
            has_cdl: true,
            number: number.into(),
            expiration: expiration.into(),
        }
    }

    /// Validates the form against `today`.
    ///
    /// An unticked form yields `None` and whatever was typed is dropped.
    ///
    /// # Errors
    ///
    /// Returns the first of [`RosterDomainError::MissingCdlNumber`],
    /// [`RosterDomainError::MissingCdlExpiration`],
    /// [`RosterDomainError::InvalidCdlExpiration`], or
    /// [`RosterDomainError::CdlExpired`] that applies.
    pub fn validate(&self, today: NaiveDate) -> Result<Option<CdlCredential>, RosterDomainError> {
        if !self.has_cdl {
            return Ok(None);
        }
        let number = self.number.trim();
        if number.is_empty() {
            return Err(RosterDomainError::MissingCdlNumber);
        }
        let expiration = self.expiration.trim();
        if expiration.is_empty() {
            return Err(RosterDomainError::MissingCdlExpiration);
        }
        let expires_on = NaiveDate::parse_from_str(expiration, DATE_FORMAT)
            .map_err(|_| RosterDomainError::InvalidCdlExpiration(self.expiration.clone()))?;
        if expires_on <= today {
            return Err(RosterDomainError::CdlExpired);
        }
        Ok(Some(CdlCredential {
            number: number.to_owned(),
            expires_on,
        }))
    }
}
