//! Error types for roster validation.

use thiserror::Error;

/// Errors returned while validating driver details.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The email address does not look like one.
    #[error("Please enter a valid email address")]
    InvalidEmail(String),

    /// A first or last name is blank.
    #[error("{field} must not be empty")]
    EmptyName {
        /// Which name was blank.
        field: &'static str,
    },

    /// The CDL box is ticked but no number was given.
    #[error("CDL number is required when CDL is enabled")]
    MissingCdlNumber,

    /// The CDL box is ticked but no expiration date was given.
    #[error("CDL expiration date is required when CDL is enabled")]
    MissingCdlExpiration,

    /// The expiration date is not a `YYYY-MM-DD` date.
    #[error("invalid CDL expiration date '{0}', expected YYYY-MM-DD")]
    InvalidCdlExpiration(String),

    /// The expiration date is today or earlier.
    #[error("CDL expiration date must be in the future")]
    CdlExpired,
}
