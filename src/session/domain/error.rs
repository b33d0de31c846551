//! Error types for session access checks and role parsing.

use super::Role;
use thiserror::Error;

/// Returned when a session may not perform an action.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The session carries a different role.
    #[error("{required} role required, session has {actual}")]
    Forbidden {
        /// Role the action needs.
        required: Role,
        /// Role the session carries.
        actual: Role,
    },

    /// The session carries no role at all.
    #[error("{required} role required, session has no role")]
    MissingRole {
        /// Role the action needs.
        required: Role,
    },
}

/// Error returned while parsing a role attribute.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
