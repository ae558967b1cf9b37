//! Bearer-token gated account service.
//!
//! Hexagonal layout: [`domain`] holds the credential model, token codec, and
//! account use-cases behind ports; [`inbound`] adapts HTTP onto those ports;
//! [`outbound`] provides storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::{RequireBearer, Trace};
