//! Process-local `AccountRepository` adapter.
//!
//! Accounts live in insertion order behind a `tokio` read/write lock, so
//! lookups run concurrently and creations serialise. Email uniqueness is
//! enforced here rather than in the service layer.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountFilter, Credential};

/// In-memory account store. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(
        &self,
        credential: &Credential,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| account.matches(credential))
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .iter()
            .any(|existing| existing.email() == account.email())
        {
            return Err(AccountRepositoryError::duplicate(account.email()));
        }
        accounts.push(account.clone());
        debug!(account_id = %account.id(), total = accounts.len(), "stored account");
        Ok(())
    }

    async fn find(
        &self,
        filter: &AccountFilter,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| filter.accepts(account))
            .cloned())
    }
}
