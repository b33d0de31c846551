//! Service layer wrapping the identity provider.

use crate::session::{
    domain::{Page, RouteDecision, Session, navigation_for, resolve_route},
    ports::{IdentityError, IdentityProvider},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionServiceError {
    /// The identity provider rejected the request.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Result type for session service operations.
pub type SessionServiceResult<T> = Result<T, SessionServiceError>;

/// Sign-in, sign-out, and route resolution against the current session.
#[derive(Clone)]
pub struct SessionService<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SessionService<P>
where
    P: IdentityProvider,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Signs in after trimming and lowercasing the email.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Identity`] when the credentials are
    /// rejected or the backend fails.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionServiceResult<Session> {
        let normalized = email.trim().to_lowercase();
        match self.provider.sign_in(&normalized, password).await {
            Ok(session) => {
                tracing::info!(
                    user_id = %session.user_id(),
                    role = ?session.role(),
                    "signed in"
                );
                Ok(session)
            }
            Err(err) => {
                tracing::warn!(email = %normalized, error = %err, "sign-in rejected");
                Err(err.into())
            }
        }
    }

    /// Signs out the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Identity`] when no session is open or
    /// the backend fails.
    pub async fn sign_out(&self) -> SessionServiceResult<()> {
        self.provider.sign_out().await?;
        tracing::info!("signed out");
        Ok(())
    }

    /// Returns the current session, if one is open.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Identity`] when the backend fails.
    pub async fn current(&self) -> SessionServiceResult<Option<Session>> {
        Ok(self.provider.current_session().await?)
    }

    /// Resolves `path` against the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Identity`] when the backend fails.
    pub async fn route(&self, path: &str) -> SessionServiceResult<RouteDecision> {
        let session = self.current().await?;
        Ok(resolve_route(path, session.as_ref()))
    }

    /// Returns the navigation entries for the current session.
    ///
    /// Empty when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionServiceError::Identity`] when the backend fails.
    pub async fn navigation(&self) -> SessionServiceResult<Vec<Page>> {
        let session = self.current().await?;
        Ok(session.as_ref().map(navigation_for).unwrap_or_default())
    }
}
