//! Account table held in process memory.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::session::{
    domain::{Role, Session, UserId},
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Thread-safe in-memory identity provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<IdentityState>>,
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<String, Account>,
    current: Option<Session>,
}

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password_digest: [u8; 32],
    role: Option<Role>,
}

impl InMemoryIdentityProvider {
    /// Creates a provider with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account and returns its user identifier.
    ///
    /// Emails are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Backend`] when the account table lock is
    /// poisoned.
    pub fn add_account(
        &self,
        email: &str,
        password: &str,
        role: Option<Role>,
    ) -> IdentityResult<UserId> {
        let mut state = self
            .state
            .write()
            .map_err(|err| IdentityError::backend(std::io::Error::other(err.to_string())))?;
        let user_id = UserId::new();
        state.accounts.insert(
            normalize_email(email),
            Account {
                user_id,
                password_digest: digest(password),
                role,
            },
        );
        Ok(user_id)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn digest(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<Session> {
        let mut state = self
            .state
            .write()
            .map_err(|err| IdentityError::backend(std::io::Error::other(err.to_string())))?;
        let key = normalize_email(email);
        let account = state
            .accounts
            .get(&key)
            .filter(|account| account.password_digest == digest(password))
            .cloned()
            .ok_or(IdentityError::InvalidCredentials)?;
        let session = Session::new(account.user_id, key, account.role);
        state.current = Some(session.clone());
        Ok(session)
    }

    async fn current_session(&self) -> IdentityResult<Option<Session>> {
        let state = self
            .state
            .read()
            .map_err(|err| IdentityError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.current.clone())
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| IdentityError::backend(std::io::Error::other(err.to_string())))?;
        state
            .current
            .take()
            .map(|_| ())
            .ok_or(IdentityError::NotSignedIn)
    }
}
