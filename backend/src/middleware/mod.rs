//! Request middleware.
//!
//! Purpose: request lifecycle concerns that wrap handlers: correlation
//! identifiers ([`Trace`]) and the bearer-token authorization gate
//! ([`RequireBearer`]).

pub mod authorization;
pub mod trace;

pub use authorization::{AuthenticatedSubject, RequireBearer};
pub use trace::Trace;
