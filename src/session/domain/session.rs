//! Authenticated session snapshot.

use super::{AccessError, Role, UserId};
use serde::{Deserialize, Serialize};

/// The signed-in user as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: UserId,
    email: String,
    role: Option<Role>,
}

impl Session {
    /// Creates a session snapshot.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    /// Returns the authenticated user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the account email shown in the navigation bar.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role attribute, if the account has one.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns `true` for dispatcher sessions.
    #[must_use]
    pub fn is_dispatcher(&self) -> bool {
        self.role == Some(Role::Dispatcher)
    }

    /// Returns `true` for driver sessions.
    #[must_use]
    pub fn is_driver(&self) -> bool {
        self.role == Some(Role::Driver)
    }

    /// Checks that the session carries `required`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MissingRole`] when the session has no role and
    /// [`AccessError::Forbidden`] when it has a different one.
    pub fn require_role(&self, required: Role) -> Result<(), AccessError> {
        match self.role {
            Some(actual) if actual == required => Ok(()),
            Some(actual) => Err(AccessError::Forbidden { required, actual }),
            None => Err(AccessError::MissingRole { required }),
        }
    }
}
