//! Identity provider port standing in for the hosted authentication service.

use crate::session::domain::Session;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Authentication contract.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with email and password, replacing any current session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when the email is
    /// unknown or the password does not match.
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Session>;

    /// Returns the current session, if one is open.
    async fn current_session(&self) -> IdentityResult<Option<Session>>;

    /// Closes the current session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotSignedIn`] when no session is open.
    async fn sign_out(&self) -> IdentityResult<()>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// Email or password was rejected.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// No session is open.
    #[error("no active session")]
    NotSignedIn,

    /// Backend failure.
    #[error("identity backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
