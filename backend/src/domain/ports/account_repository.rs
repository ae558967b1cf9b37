//! Driven port for account persistence.
//!
//! The authentication service owns no storage. Every account lookup and
//! creation goes through this contract; uniqueness and consistency are the
//! adapter's responsibility.

use async_trait::async_trait;

use crate::domain::{Account, AccountFilter, Credential};

use super::define_port_error;

define_port_error! {
    /// Failures raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } => "account repository connection failed: {message}",
        /// A query or mutation failed while executing.
        Query { message: String } => "account repository query failed: {message}",
        /// An account with the same email already exists.
        Duplicate { email: String } => "an account already exists for {email}",
    }
}

/// Persistence contract for accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Account matching both fields of `credential`, if any.
    async fn get(&self, credential: &Credential) -> Result<Option<Account>, AccountRepositoryError>;

    /// Persist a new account.
    ///
    /// Failure conditions, duplicates included, are defined by the adapter.
    async fn create(&self, account: &Account) -> Result<(), AccountRepositoryError>;

    /// First account satisfying every constrained field of `filter`.
    async fn find(&self, filter: &AccountFilter) -> Result<Option<Account>, AccountRepositoryError>;
}
