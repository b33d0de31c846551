//! Error types for container count entry.

use crate::store::domain::StoreId;
use thiserror::Error;

/// Errors returned while validating a container count submission.
///
/// Messages are the ones shown on the entry form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContainerDomainError {
    /// No store was picked.
    #[error("Please select a store")]
    StoreNotSelected,

    /// Opener name or arrival time is blank.
    #[error("Please fill in opener name and arrival time")]
    MissingOpenerOrArrival,

    /// One or more count fields are blank, listed in form order.
    #[error("Please fill in all supply counts: {}", .0.join(", "))]
    MissingCounts(Vec<&'static str>),

    /// A count is not a whole number of zero or more.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidCount {
        /// Form field name.
        field: &'static str,
        /// Value as typed.
        value: String,
    },

    /// The arrival time is not `HH:MM`.
    #[error("invalid arrival time '{0}', expected HH:MM")]
    InvalidArrivalTime(String),

    /// Trailer fullness is above 100 percent.
    #[error("trailer fullness must be between 0 and 100, got {0}")]
    TrailerFullnessOutOfRange(u32),

    /// The selected store does not exist.
    #[error("Store not found")]
    StoreNotFound(StoreId),
}
