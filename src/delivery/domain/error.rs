//! Error types for delivery run validation and parsing.

use super::RunStatus;
use thiserror::Error;

/// Errors returned by delivery run state changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryDomainError {
    /// The run cannot move from its current status to the target.
    #[error("cannot move run from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: RunStatus,
        /// Requested status.
        to: RunStatus,
    },
}

/// Error returned while parsing run statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown run status: {0}")]
pub struct ParseRunStatusError(pub String);

/// Error returned while parsing truck types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown truck type: {0}")]
pub struct ParseTruckTypeError(pub String);

/// Error returned while parsing dispatch board filters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown run filter: {0}")]
pub struct ParseRunFilterError(pub String);
