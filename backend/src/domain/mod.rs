//! Domain primitives, ports, and services.
//!
//! Purpose: hold the authentication triad's protocol and business rules,
//! independent of HTTP and storage.
//!
//! Public surface:
//! - `Credential`, `Account`, `AccountId`, `AccountFilter`: data model.
//! - `TokenCodec`, `TokenDelimiter`, `BearerToken`: bearer token wire format.
//! - `AuthenticationService`: account rules over an `AccountRepository`.
//! - `AuthError`: typed failures; `Error`/`ErrorCode`: client payload.
//! - `TraceId`: request correlation identifier.

pub mod account;
pub mod auth_error;
pub mod authentication_service;
pub mod credential;
pub mod error;
pub mod ports;
pub mod token;
pub mod trace_id;

pub use self::account::{Account, AccountFilter, AccountId};
pub use self::auth_error::AuthError;
pub use self::authentication_service::AuthenticationService;
pub use self::credential::{Credential, CredentialValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::token::{
    BEARER_PREFIX, BearerToken, DEFAULT_TOKEN_DELIMITER, EmptyDelimiterError, TokenCodec,
    TokenDelimiter, TokenError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
