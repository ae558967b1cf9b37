//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use auth_gate::domain::TokenCodec;
use auth_gate::domain::ports::AccountRepository;
use auth_gate::inbound::http::DEFAULT_API_PREFIX;
use auth_gate::outbound::persistence::InMemoryAccountRepository;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_prefix: String,
    pub(crate) codec: TokenCodec,
    pub(crate) repository: Arc<dyn AccountRepository>,
}

impl ServerConfig {
    /// Bind to `bind_addr` with the default prefix, delimiter, and an empty
    /// in-memory account store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            codec: TokenCodec::default(),
            repository: Arc::new(InMemoryAccountRepository::new()),
        }
    }

    /// Mount the account and resource routes under `prefix`.
    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Use `codec` for issuing and checking bearer tokens.
    #[must_use]
    pub fn with_codec(mut self, codec: TokenCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
