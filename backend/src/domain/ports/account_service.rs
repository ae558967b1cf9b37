//! Driving port for the account use-cases.
//!
//! Inbound adapters (HTTP handlers and the authorization gate) depend on this
//! trait rather than on [`crate::domain::AuthenticationService`], so their
//! tests can substitute a mock and assert exactly which calls were made.

use async_trait::async_trait;

use crate::domain::{AccountId, AuthError, Credential};

/// Account use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Succeed when an account matches `credential` on both fields.
    async fn check_user(&self, credential: &Credential) -> Result<(), AuthError>;

    /// Register a new account for `credential` and return its identifier.
    async fn add_user(&self, credential: &Credential) -> Result<AccountId, AuthError>;

    /// Stored password of the account registered under `email`.
    async fn get_password(&self, email: &str) -> Result<String, AuthError>;
}
