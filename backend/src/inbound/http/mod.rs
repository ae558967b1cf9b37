//! HTTP inbound adapter exposing the account and resource endpoints.

pub mod accounts;
pub mod error;
pub mod health;
pub mod resource;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Prefix the account and resource routes mount under unless configured.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
