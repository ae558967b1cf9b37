//! Account business rules.
//!
//! [`AuthenticationService`] implements the [`AccountService`] driving port
//! on top of any [`AccountRepository`]. It holds no mutable state, so one
//! instance serves concurrent requests. Absent lookups become named
//! [`AuthError`] variants; repository failures pass through untouched and
//! are never retried.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AccountRepository, AccountService};
use crate::domain::{Account, AccountFilter, AccountId, AuthError, Credential};

/// Account service backed by an [`AccountRepository`].
///
/// `R` may be a concrete adapter or `dyn AccountRepository`.
pub struct AuthenticationService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> AuthenticationService<R> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for AuthenticationService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R> AccountService for AuthenticationService<R>
where
    R: AccountRepository + ?Sized,
{
    async fn check_user(&self, credential: &Credential) -> Result<(), AuthError> {
        match self.repository.get(credential).await? {
            Some(_) => Ok(()),
            None => Err(AuthError::authentication_failed(credential.email())),
        }
    }

    async fn add_user(&self, credential: &Credential) -> Result<AccountId, AuthError> {
        let account = Account::from_credential(credential, AccountId::random());
        self.repository.create(&account).await?;
        debug!(account_id = %account.id(), email = credential.email(), "account created");
        Ok(account.id())
    }

    async fn get_password(&self, email: &str) -> Result<String, AuthError> {
        let filter = AccountFilter::by_email(email);
        self.repository
            .find(&filter)
            .await?
            .map(|account| account.password().to_owned())
            .ok_or_else(|| AuthError::user_not_found(email))
    }
}

#[cfg(test)]
#[path = "authentication_service_tests.rs"]
mod tests;
