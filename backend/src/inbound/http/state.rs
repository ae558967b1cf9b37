//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the account port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::TokenCodec;
use crate::domain::ports::AccountService;

/// Dependency bundle for HTTP handlers and the authorization gate.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub codec: Arc<TokenCodec>,
}

impl HttpState {
    /// Construct state from the account port and token codec.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use auth_gate::domain::{AuthenticationService, TokenCodec};
    /// use auth_gate::inbound::http::state::HttpState;
    /// use auth_gate::outbound::persistence::InMemoryAccountRepository;
    ///
    /// let service = AuthenticationService::new(Arc::new(InMemoryAccountRepository::new()));
    /// let state = HttpState::new(Arc::new(service), Arc::new(TokenCodec::default()));
    /// let _gate = state.require_bearer();
    /// ```
    pub fn new(accounts: Arc<dyn AccountService>, codec: Arc<TokenCodec>) -> Self {
        Self { accounts, codec }
    }

    /// Authorization gate sharing this state's port and codec.
    pub fn require_bearer(&self) -> crate::middleware::RequireBearer {
        crate::middleware::RequireBearer::new(Arc::clone(&self.codec), Arc::clone(&self.accounts))
    }
}
