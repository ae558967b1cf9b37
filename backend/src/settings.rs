//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `AUTH_GATE_*` environment variables, or a
//! configuration file; anything left unset falls back to the defaults below.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_TOKEN_DELIMITER, EmptyDelimiterError, TokenDelimiter};
use crate::inbound::http::DEFAULT_API_PREFIX;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while turning raw settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Host and port did not resolve to a socket address.
    #[error("cannot resolve bind address {address}: {source}")]
    BindAddress {
        address: String,
        #[source]
        source: std::io::Error,
    },
    /// Host resolved to no addresses at all.
    #[error("bind address {address} resolved to nothing")]
    UnresolvedBindAddress { address: String },
    /// The configured token delimiter was empty.
    #[error(transparent)]
    TokenDelimiter(#[from] EmptyDelimiterError),
    /// The API prefix did not start with `/`.
    #[error("api prefix must start with '/': {prefix}")]
    ApiPrefix { prefix: String },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTH_GATE")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Separator joining email and password inside bearer tokens. Changing it
    /// invalidates every issued token.
    pub token_delimiter: Option<String>,
    /// Path prefix for the account and resource routes.
    pub api_prefix: Option<String>,
}

impl AppSettings {
    /// Interface to bind, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// TCP port to bind, defaulting to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve host and port to the first matching socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.host(), self.port());
        (self.host(), self.port())
            .to_socket_addrs()
            .map_err(|source| SettingsError::BindAddress {
                address: address.clone(),
                source,
            })?
            .next()
            .ok_or(SettingsError::UnresolvedBindAddress { address })
    }

    /// Validated token delimiter.
    pub fn token_delimiter(&self) -> Result<TokenDelimiter, SettingsError> {
        let raw = self
            .token_delimiter
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_DELIMITER);
        Ok(TokenDelimiter::new(raw)?)
    }

    /// API prefix without a trailing slash; `/` alone mounts at the root.
    pub fn api_prefix(&self) -> Result<String, SettingsError> {
        let raw = self.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX);
        if !raw.starts_with('/') {
            return Err(SettingsError::ApiPrefix {
                prefix: raw.to_owned(),
            });
        }
        Ok(raw.trim_end_matches('/').to_owned())
    }
}
